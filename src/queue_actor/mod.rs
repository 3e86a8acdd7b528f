//! Queue message records. The collection is fixed at startup.

pub mod entity;
pub mod error;

pub use error::*;
