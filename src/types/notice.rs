use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category value the board uses to mean "every category".
pub const ALL_CATEGORIES: &str = "전체";

/// Author name used when the writer has no display name.
pub const DEFAULT_AUTHOR_NAME: &str = "관리자";

#[derive(Serialize, Deserialize, Debug)]
pub struct RNoticeCreate {
    pub title: String,
    pub category: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RNoticeUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct NoticeQuery {
    pub category: Option<String>,
}

impl NoticeQuery {
    /// `None` when every notice should be listed.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }
}

#[derive(Debug, Clone)]
pub struct DBNoticeCreate {
    pub title: String,
    pub category: String,
    pub content: String,
    pub date: String,
    pub author_id: Uuid,
    pub author_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct DBNoticePatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::notice::Model> for Notice {
    fn from(m: entity::notice::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            content: m.content,
            category: m.category,
            date: m.date,
            author_id: m.author_id,
            author_name: m.author_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Today's date (UTC) in the board's `YYYY-MM-DD` form.
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_means_no_filter() {
        let q = NoticeQuery { category: Some(ALL_CATEGORIES.to_string()) };
        assert_eq!(q.category_filter(), None);
        assert_eq!(NoticeQuery::default().category_filter(), None);
        let q = NoticeQuery { category: Some("  ".to_string()) };
        assert_eq!(q.category_filter(), None);
    }

    #[test]
    fn category_filter_is_trimmed() {
        let q = NoticeQuery { category: Some(" 행사 ".to_string()) };
        assert_eq!(q.category_filter(), Some("행사"));
    }

    #[test]
    fn today_is_iso_day() {
        let d = today();
        assert_eq!(d.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_ok());
    }
}
