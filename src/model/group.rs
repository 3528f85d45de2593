//! Travel groups and their membership. Declared only; no routes read or write them.

use crate::model::UserId;
use serde::Serialize;

pub(crate) const DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS groups (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

pub(crate) const MEMBERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS group_members (
        user_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        group_id BIGINT NOT NULL REFERENCES groups (id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, group_id)
    )
"#;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct GroupMember {
    pub user_id: UserId,
    pub group_id: i64,
}
