//! # Command router
//!
//! Binds command names to handlers and dispatches inbound events. The table is built once at
//! startup and is read-only afterwards, so a single router is shared across concurrently processed
//! chats without locking. Unknown commands, handler errors and handler panics never escape
//! [`CommandRouter::dispatch`].

mod router;
mod service;

pub use router::CommandRouter;
pub use service::CommandService;

// Integration tests live in tests/command_router_test.rs and tests/command_service_test.rs
