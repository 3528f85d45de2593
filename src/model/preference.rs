use crate::model::UserId;
use serde::Serialize;

pub(crate) const DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS preferences (
        id BIGSERIAL PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        holiday_id BIGINT NOT NULL REFERENCES holidays (id) ON DELETE CASCADE,
        tags TEXT,
        max_budget DOUBLE PRECISION
    )
"#;

/// Per-user wishes for a holiday. `tags` is a free-form comma list.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Preference {
    pub id: i64,
    pub user_id: UserId,
    pub holiday_id: i64,
    pub tags: Option<String>,
    pub max_budget: Option<f64>,
}
