//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod dashboard_system;
pub mod error;
pub mod tracing;

pub use config::*;
pub use dashboard_system::*;
pub use error::*;
pub use self::tracing::*;
