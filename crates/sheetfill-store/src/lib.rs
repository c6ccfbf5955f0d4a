pub mod csv_store;
pub mod error;
pub mod memory;
pub mod traits;

pub use csv_store::{CsvReadOptions, CsvStore, CsvTypeInference, CsvWriteOptions};
pub use error::StoreError;
pub use memory::MemoryTable;
pub use traits::TabularStore;

// Re-export for convenience
pub use sheetfill_common::{CellValue, RowRange};
