use super::list_state::{ListRow, ListState};

/// Table layout of a record: header labels and the matching cell values
pub trait ListColumns {
    const HEADERS: &'static [&'static str];

    /// One value per header, same order
    fn cells(&self) -> Vec<String>;
}

/// What the table renders for one snapshot row
#[derive(Clone, Debug, PartialEq)]
pub struct RowCells {
    pub cells: Vec<String>,
    pub provisional: bool,
}

/// Rendered rows of the snapshot, in snapshot order
pub fn table_rows<T: ListColumns>(state: &ListState<T>) -> Vec<RowCells> {
    state
        .rows
        .iter()
        .map(|ListRow { record, provisional }| RowCells {
            cells: record.cells(),
            provisional: *provisional,
        })
        .collect()
}
