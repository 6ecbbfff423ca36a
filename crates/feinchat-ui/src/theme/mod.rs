//! Theme system for Fein-AI
//!
//! Provides color definitions and styling for the dark chat layout.

mod colors;

pub use colors::*;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub spacing: Spacing,
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the default dark theme
    pub fn dark() -> Self {
        Self {
            colors: ThemeColors::dark(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }
}

/// Spacing constants
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (12px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Extra large spacing (24px)
    pub xl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// Typography settings
#[derive(Debug, Clone)]
pub struct Typography {
    /// Base font size
    pub base_size: f32,
    /// Small font size
    pub small_size: f32,
    /// Header font size
    pub header_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            base_size: 14.0,
            small_size: 12.0,
            header_size: 18.0,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Sidebar width in pixels
    pub const SIDEBAR_WIDTH: f32 = 320.0;
    /// Logo header height in pixels
    pub const LOGO_HEADER_HEIGHT: f32 = 88.0;
    /// Composer height in pixels
    pub const COMPOSER_HEIGHT: f32 = 72.0;
    /// Message bubble max width in pixels
    pub const BUBBLE_MAX_WIDTH: f32 = 560.0;
    /// Border radius
    pub const BORDER_RADIUS: f32 = 8.0;
    /// Border radius small
    pub const BORDER_RADIUS_SM: f32 = 4.0;
}
