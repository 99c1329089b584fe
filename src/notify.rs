//! Notification payload construction and delivery.
//!
//! Delivery goes through the [`NotificationSink`] trait so the display-mode
//! semantics stay testable without a session bus.

mod present;
mod sink;

pub use present::*;
pub use sink::*;
