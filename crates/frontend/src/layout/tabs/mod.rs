//! Tab management: the page wrapper, the key → view registry and the
//! label table for every tab key.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{is_known_tab, tab_icon, tab_label_for_key, ACCOUNT_TAB, DASHBOARD_TAB};
