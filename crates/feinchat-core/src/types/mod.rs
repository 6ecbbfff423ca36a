//! Core type definitions for Fein-AI
//!
//! This module contains the shared types used across the application:
//! chat messages, conversation history summaries, and the topic catalog.

mod history_types;
mod message_types;
mod topic_types;

pub use history_types::*;
pub use message_types::*;
pub use topic_types::*;
