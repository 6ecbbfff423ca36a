//! Color definitions for the Fein-AI theme

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBBAA)
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create with alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    /// Window/panel background
    pub panel_bg: Rgba,
    /// Sidebar background
    pub sidebar_bg: Rgba,
    /// Surface/card background
    pub surface: Rgba,
    /// Elevated surface (hovered cards, assistant bubbles)
    pub surface_elevated: Rgba,
    /// Input field background
    pub input_bg: Rgba,

    // === Brand Colors ===
    /// Primary brand color (investment green)
    pub primary: Rgba,
    /// Primary hover state
    pub primary_hover: Rgba,
    /// Accent color (selection highlight)
    pub accent: Rgba,

    // === Text Colors ===
    /// Primary text (pale lime, from the brand palette)
    pub text_primary: Rgba,
    /// Secondary/muted text
    pub text_secondary: Rgba,
    /// Faint text (dates, timestamps)
    pub text_faint: Rgba,
    /// Text on primary-colored surfaces
    pub text_on_primary: Rgba,

    // === UI Elements ===
    /// Border color
    pub border: Rgba,
    /// Border subtle
    pub border_subtle: Rgba,
    /// Hover state
    pub hover: Rgba,
    /// Selected-card tint
    pub selection: Rgba,
}

impl ThemeColors {
    /// Create the dark theme color palette
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            panel_bg: Rgba::rgb(0x0f0f0f),          // Near-black canvas
            sidebar_bg: Rgba::rgb(0x0f0f0f),        // Sidebar matches the canvas
            surface: Rgba::rgb(0x111827),           // Card background
            surface_elevated: Rgba::rgb(0x1f2937),  // Hovered card / assistant bubble
            input_bg: Rgba::rgb(0x111827),          // Input background

            // Brand colors
            primary: Rgba::rgb(0x16a34a),           // Investment green
            primary_hover: Rgba::rgb(0x15803d),     // Primary hover
            accent: Rgba::rgb(0x22c55e),            // Selection highlight

            // Text colors
            text_primary: Rgba::rgb(0xddf1a5),      // Pale lime brand text
            text_secondary: Rgba::rgb(0x9ca3af),    // Muted text
            text_faint: Rgba::rgb(0x6b7280),        // Dates, timestamps
            text_on_primary: Rgba::rgb(0xffffff),   // Text on green

            // UI Elements
            border: Rgba::rgb(0x1f2937),            // Border color
            border_subtle: Rgba::rgb(0x374151),     // Input/card outline
            hover: Rgba::from_hex(0xb1bac420),      // Hover state
            selection: Rgba::from_hex(0x22c55e1a),  // Selected-card tint
        }
    }
}
