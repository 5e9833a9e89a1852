pub mod account;
pub mod auth;
pub mod pages;
pub mod users;
