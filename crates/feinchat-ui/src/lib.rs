//! Fein-AI UI Library
//!
//! GPUI-based desktop UI for the Fein-AI investment chat.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ Window                                                     │
//! ├───────────────────┬────────────────────────────────────────┤
//! │ Sidebar (320px)   │  MainPanel (flex-1)                    │
//! │                   │                                        │
//! │ ┌───────────────┐ │  ┌──────────────────────────────────┐  │
//! │ │Logo           │ │  │Transcript                        │  │
//! │ └───────────────┘ │  │  assistant ──────────            │  │
//! │                   │  │            ────────── user       │  │
//! │ ┌───────────────┐ │  │                                  │  │
//! │ │HistoryList    │ │  └──────────────────────────────────┘  │
//! │ │  Summary      │ │  ┌──────────────────────────────────┐  │
//! │ │  Summary      │ │  │TopicCarousel  ‹ [x] [x] [x] ›    │  │
//! │ │  Summary      │ │  └──────────────────────────────────┘  │
//! │ │               │ │  ┌──────────────────────────────────┐  │
//! │ └───────────────┘ │  │Composer  [TextInput]      [Send] │  │
//! │                   │  └──────────────────────────────────┘  │
//! └───────────────────┴────────────────────────────────────────┘
//! ```

pub mod components;
pub mod theme;

// Re-exports
pub use theme::{layout, Rgba, Spacing, Theme, ThemeColors, Typography};
