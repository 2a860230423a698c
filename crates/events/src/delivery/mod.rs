//! Concrete notification channels.
//!
//! Each submodule implements [`NotificationSink`](crate::sink::NotificationSink)
//! for one external delivery mechanism.

pub mod email;
pub mod webhook;
