use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsItem {
    pub title: String,
    pub count: i64,
}

impl AnalyticsItem {
    pub fn new(title: impl Into<String>, count: i64) -> Self {
        Self {
            title: title.into(),
            count,
        }
    }
}

/// Per-school headline numbers, in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolCounts {
    pub students: i64,
    pub teachers: i64,
    pub parents: i64,
    pub classes: i64,
}

impl SchoolCounts {
    pub fn into_items(self) -> Vec<AnalyticsItem> {
        vec![
            AnalyticsItem::new("Students", self.students),
            AnalyticsItem::new("Teachers", self.teachers),
            AnalyticsItem::new("Parents", self.parents),
            AnalyticsItem::new("Classes", self.classes),
        ]
    }
}

/// `{id, name}` rows used by form dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct BriefItem {
    pub id: uuid::Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_render_in_display_order() {
        let items = SchoolCounts {
            students: 10,
            teachers: 2,
            parents: 7,
            classes: 3,
        }
        .into_items();

        let value = serde_json::to_value(&items).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"title": "Students", "count": 10},
                {"title": "Teachers", "count": 2},
                {"title": "Parents", "count": 7},
                {"title": "Classes", "count": 3}
            ])
        );
    }
}
