pub mod account;
pub mod auth;
pub mod permissions;
pub mod users;
