pub mod client;
pub mod config;
pub mod error;
pub mod i18n;
pub mod resolver;
pub mod retry;
pub mod routing;
pub mod server;
pub mod store;
