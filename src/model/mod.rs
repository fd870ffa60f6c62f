pub mod probe;
pub mod record;
pub mod scanner;
pub mod table;

pub use record::{ImageRecord, ScanFailure, ScanReport};
pub use table::{ResultsTable, RowId, SortColumn, SortOrder};
