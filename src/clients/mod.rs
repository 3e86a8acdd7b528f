//! Typed handles onto the store actors.

#[macro_use]
mod macros;
mod order_client;
mod queue_client;

pub use order_client::*;
pub use queue_client::*;
