//! List and create-dialog state shared by every entity page

pub mod columns;
pub mod dialog_state;
pub mod list_state;
pub mod tasks;

pub use columns::{table_rows, ListColumns, RowCells};
pub use dialog_state::{CreateDialogState, SubmitRejected};
pub use list_state::{create_state, Created, ListRow, ListState};
pub use tasks::{spawn_fetch, spawn_submit};
