pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod model;
pub mod pipeline;
pub mod progress;
pub mod query;
pub mod transform;

pub use config::EtlConfig;
pub use error::EtlError;
pub use model::{BankRecord, Currency, ExtractedBank};
