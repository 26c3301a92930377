pub mod csv_file;
pub mod sqlite;

pub use csv_file::{read_csv, write_csv};
pub use sqlite::{load_to_db, open_db};
