pub mod csv;
pub mod file;

pub use csv::{write_csv, CsvExport, CSV_MIME_TYPE};
pub use file::{save_to_dir, validate_file_name};
