pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod forms;
pub mod icons;
pub mod list_state;
pub mod modal;
pub mod notify;
pub mod page_frame;
pub mod password;
