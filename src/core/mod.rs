pub mod backfill;
pub mod calendar;
pub mod cell;
pub mod dates;
pub mod generator;
pub mod records;
pub mod serial;
pub mod table;

pub use calendar::generate_working_days;
pub use cell::CellValue;
pub use dates::DateSet;
pub use generator::{FixedWorkdayGenerator, Record, RecordGenerator};
pub use records::{ColumnNames, generate_table};
pub use table::ColumnTable;
