//! SVG icon component for consistent icon rendering
//!
//! Icons are stored in assets/icons/ as SVG files and loaded through the
//! application's asset source.

use feinchat_core::TopicIcon;
use gpui::*;

/// Icon names corresponding to SVG files in assets/icons/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    // Carousel paging
    ChevronLeft,
    ChevronRight,

    // Composer
    Send,

    // Topic glyphs
    PieChart,
    TrendingUp,
    BarChart,
    DollarSign,
}

impl IconName {
    /// Get the path to the SVG file
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "icons/chevron_left.svg",
            IconName::ChevronRight => "icons/chevron_right.svg",
            IconName::Send => "icons/send.svg",
            IconName::PieChart => "icons/pie_chart.svg",
            IconName::TrendingUp => "icons/trending_up.svg",
            IconName::BarChart => "icons/bar_chart.svg",
            IconName::DollarSign => "icons/dollar_sign.svg",
        }
    }
}

/// Resolve a topic's opaque icon reference to a concrete glyph.
pub fn topic_icon(icon: TopicIcon) -> IconName {
    match icon {
        TopicIcon::PieChart => IconName::PieChart,
        TopicIcon::TrendingUp => IconName::TrendingUp,
        TopicIcon::BarChart => IconName::BarChart,
        TopicIcon::DollarSign => IconName::DollarSign,
    }
}

/// Standard icon sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IconSize {
    /// Extra small: 12px
    XSmall,
    /// Small: 14px
    Small,
    /// Medium: 16px (default)
    #[default]
    Medium,
    /// Large: 20px
    Large,
}

impl IconSize {
    /// Get the size in pixels
    pub fn px(&self) -> f32 {
        match self {
            IconSize::XSmall => 12.0,
            IconSize::Small => 14.0,
            IconSize::Medium => 16.0,
            IconSize::Large => 20.0,
        }
    }
}

/// Create an SVG icon element
///
/// # Example
/// ```ignore
/// svg_icon(IconName::Send, IconSize::Small)
///     .text_color(rgb(colors.text_secondary))
/// ```
pub fn svg_icon(name: IconName, size: IconSize) -> Svg {
    let px_size = size.px();
    svg()
        .path(name.path())
        .size(px(px_size))
        .flex_shrink_0()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_icon_resolves() {
        for topic in feinchat_core::Topic::ALL {
            let name = topic_icon(topic.icon());
            assert!(name.path().starts_with("icons/"));
            assert!(name.path().ends_with(".svg"));
        }
    }
}
