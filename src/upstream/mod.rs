//! Outbound calls to third-party services.
//!
//! # Data Flow
//! ```text
//! handler
//!     → status.rs / vm.rs (build request, attach credentials)
//!     → client.rs (send, deadline, JSON check, metrics)
//!     → Result<Bytes, UpstreamError> (body exactly as received)
//!     → handler branches on Ok / Err
//! ```

pub mod client;
pub mod error;
pub mod status;
pub mod vm;

pub use client::{build_http_client, StatusPolicy};
pub use error::{UpstreamError, UpstreamResult};
pub use status::McStatusClient;
pub use vm::VmClient;
