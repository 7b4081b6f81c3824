//! User-facing messages.
//!
//! Every text jlog prints lives in [`Message`]; the `msg_*` macros decide
//! whether it goes to the console or through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
