pub mod empty_state;
pub mod entity_table;
pub mod page_header;
pub mod search_bar;
pub mod ui;

pub use empty_state::EmptyState;
pub use entity_table::EntityTable;
pub use page_header::PageHeader;
pub use search_bar::SearchBar;
