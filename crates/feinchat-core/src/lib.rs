//! Fein-AI Core Library
//!
//! This crate provides the chat session logic for Fein-AI, including:
//! - Message and conversation history types
//! - The fixed investment topic catalog
//! - Seed data fixtures injected at session construction
//! - The session state container and simulated reply bookkeeping
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     feinchat-core                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  types/        - Messages, history summaries, topic catalog │
//! │  fixtures.rs   - Immutable seed data (greeting, history)    │
//! │  session.rs    - SessionState, draft/submit/select ops      │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is free of UI dependencies; the GPUI frontend in `feinchat-ui`
//! owns the timers that settle pending replies produced here.

pub mod error;
pub mod fixtures;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use fixtures::ChatFixtures;
pub use session::{PendingReply, SessionState, REPLY_DELAY};
pub use types::*;
