//! Reusable UI components
//!
//! Basic building blocks for the Fein-AI UI.

pub mod icon;
pub mod text_input;

pub use icon::{svg_icon, topic_icon, IconName, IconSize};
pub use text_input::TextInput;
