pub mod cart;
pub mod config;
pub mod logging;
pub mod route;
