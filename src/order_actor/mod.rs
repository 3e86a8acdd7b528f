//! Order records: how the store builds them, how ids are handed out, and
//! the errors order operations report.

pub mod entity;
pub mod error;
mod sequence;

pub use error::*;
pub use sequence::*;
