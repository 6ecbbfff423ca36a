//! Conversation history types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a past conversation, shown in the sidebar.
///
/// History entries are seed data: read-only for the lifetime of the
/// component, with no create/update/delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: u64,
    pub title: String,
    pub preview: String,
    pub updated_at: DateTime<Utc>,
}

impl ConversationSummary {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        preview: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            preview: preview.into(),
            updated_at,
        }
    }

    /// Date label rendered under the summary: relative for the last week,
    /// absolute beyond that. Future timestamps fall back to "Today".
    pub fn updated_label(&self, now: DateTime<Utc>) -> String {
        let days = (now.date_naive() - self.updated_at.date_naive()).num_days();
        match days {
            i64::MIN..=0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            2..=6 => format!("{} days ago", days),
            _ => self.updated_at.format("%b %-d, %Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn summary_at(updated_at: DateTime<Utc>) -> ConversationSummary {
        ConversationSummary::new(1, "Portfolio Review Q4", "Your portfolio shows...", updated_at)
    }

    #[test]
    fn test_updated_label_today() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(summary_at(now).updated_label(now), "Today");
        // Same calendar day, earlier hour
        let morning = Utc.with_ymd_and_hms(2024, 6, 15, 1, 0, 0).unwrap();
        assert_eq!(summary_at(morning).updated_label(now), "Today");
    }

    #[test]
    fn test_updated_label_yesterday() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 30, 0).unwrap();
        let updated = now - Duration::hours(2);
        assert_eq!(summary_at(updated).updated_label(now), "Yesterday");
    }

    #[test]
    fn test_updated_label_days_ago() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let updated = now - Duration::days(3);
        assert_eq!(summary_at(updated).updated_label(now), "3 days ago");
    }

    #[test]
    fn test_updated_label_absolute_beyond_a_week() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        assert_eq!(summary_at(updated).updated_label(now), "May 2, 2024");
    }

    #[test]
    fn test_updated_label_future_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let updated = now + Duration::days(2);
        assert_eq!(summary_at(updated).updated_label(now), "Today");
    }
}
