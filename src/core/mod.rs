pub mod config;
pub mod csv_reader;
pub mod numeric;
pub mod trace;

pub use config::{load_config, save_config, Config};
pub use csv_reader::CsvReader;
pub use trace::{init_logging, traced};
