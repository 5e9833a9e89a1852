pub mod empty_state;
pub mod row_actions;

pub use empty_state::TableEmptyRow;
pub use row_actions::RowActions;
