use crate::model::UserId;
use chrono::NaiveDate;
use serde::Serialize;

pub(crate) const DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS availabilities (
        id BIGSERIAL PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        holiday_id BIGINT NOT NULL REFERENCES holidays (id) ON DELETE CASCADE,
        available_dates DATE[] NOT NULL
    )
"#;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Availability {
    pub id: i64,
    pub user_id: UserId,
    pub holiday_id: i64,
    pub available_dates: Vec<NaiveDate>,
}
