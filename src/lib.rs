//! Server control panel proxy.
//!
//! Backend for a small front-end that shows a game server's status and lets
//! an authorized user power on the VM hosting it. Credentials for the VM
//! provider stay on the server; the browser only ever presents a shared
//! secret.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
