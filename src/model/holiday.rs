use crate::model::UserId;
use chrono::NaiveDate;
use serde::Serialize;

pub(crate) const DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS holidays (
        id BIGSERIAL PRIMARY KEY,
        group_id BIGINT NOT NULL REFERENCES groups (id) ON DELETE CASCADE,
        creator_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        name VARCHAR(20) NOT NULL,
        description VARCHAR(120),
        start_date DATE,
        end_date DATE
    )
"#;

/// A trip planned by a group, created by one of its members.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Holiday {
    pub id: i64,
    pub group_id: i64,
    pub creator_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
