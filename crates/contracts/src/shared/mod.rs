pub mod api;
pub mod format;
pub mod lenient;
pub mod pagination;
pub mod search;
pub mod status;
