//! Investment topic catalog
//!
//! The six suggested topics form a closed set, so the catalog is a tagged
//! enum rather than a data list: adding a variant forces every match below
//! to account for it.

use serde::{Deserialize, Serialize};

/// Opaque icon reference, resolved to an actual glyph by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicIcon {
    PieChart,
    TrendingUp,
    BarChart,
    DollarSign,
}

/// A suggested investment topic. Selecting one prefills the composer draft
/// with its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    PortfolioAnalysis,
    MarketTrends,
    InvestmentStrategy,
    RiskAssessment,
    SectorAnalysis,
    TechnicalAnalysis,
}

impl Topic {
    /// All topics, in carousel display order.
    pub const ALL: [Topic; 6] = [
        Topic::PortfolioAnalysis,
        Topic::MarketTrends,
        Topic::InvestmentStrategy,
        Topic::RiskAssessment,
        Topic::SectorAnalysis,
        Topic::TechnicalAnalysis,
    ];

    /// Look up a topic by its catalog id. Unknown ids yield `None`.
    pub fn from_id(id: u64) -> Option<Topic> {
        Self::ALL.iter().copied().find(|topic| topic.id() == id)
    }

    pub fn id(self) -> u64 {
        match self {
            Topic::PortfolioAnalysis => 1,
            Topic::MarketTrends => 2,
            Topic::InvestmentStrategy => 3,
            Topic::RiskAssessment => 4,
            Topic::SectorAnalysis => 5,
            Topic::TechnicalAnalysis => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::PortfolioAnalysis => "Portfolio Analysis",
            Topic::MarketTrends => "Market Trends",
            Topic::InvestmentStrategy => "Investment Strategy",
            Topic::RiskAssessment => "Risk Assessment",
            Topic::SectorAnalysis => "Sector Analysis",
            Topic::TechnicalAnalysis => "Technical Analysis",
        }
    }

    /// Description shown on the card; also the text that prefills the draft.
    pub fn description(self) -> &'static str {
        match self {
            Topic::PortfolioAnalysis => "Analyze your current portfolio",
            Topic::MarketTrends => "Get latest market insights",
            Topic::InvestmentStrategy => "Develop investment strategies",
            Topic::RiskAssessment => "Evaluate investment risks",
            Topic::SectorAnalysis => "Deep dive into sectors",
            Topic::TechnicalAnalysis => "Chart patterns and indicators",
        }
    }

    pub fn icon(self) -> TopicIcon {
        match self {
            Topic::PortfolioAnalysis => TopicIcon::PieChart,
            Topic::MarketTrends => TopicIcon::TrendingUp,
            Topic::InvestmentStrategy => TopicIcon::BarChart,
            Topic::RiskAssessment => TopicIcon::DollarSign,
            Topic::SectorAnalysis => TopicIcon::TrendingUp,
            Topic::TechnicalAnalysis => TopicIcon::BarChart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_unique_ids() {
        let ids: HashSet<u64> = Topic::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_from_id_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_id(topic.id()), Some(topic));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Topic::from_id(0), None);
        assert_eq!(Topic::from_id(7), None);
        assert_eq!(Topic::from_id(u64::MAX), None);
    }

    #[test]
    fn test_catalog_text_is_populated() {
        for topic in Topic::ALL {
            assert!(!topic.title().is_empty());
            assert!(!topic.description().is_empty());
        }
    }
}
