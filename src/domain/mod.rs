pub mod order;
pub mod queue_message;
pub mod seed;

pub use order::*;
pub use queue_message::*;
