mod rows;
mod view;

pub use rows::{build_rows, ColumnDef, TableRows, TableState};
pub use view::DataTable;
