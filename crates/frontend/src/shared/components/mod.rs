pub mod confirm_dialog;
pub mod filter_bar;
pub mod form_modal;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use filter_bar::FilterBar;
pub use form_modal::FormModal;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use table::{RowActions, TableEmptyRow};
