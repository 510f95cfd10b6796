//! Internal concordances service.
//!
//! Resolves externally supplied concept identifiers to canonical concept
//! records by combining two upstream lookups: the public concordances API
//! (external identifier -> canonical ids) and the concept search API
//! (canonical ids -> concept records). The response is keyed by the caller's
//! original identifiers.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod request_context;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
