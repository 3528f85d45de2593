//! Database bootstrap: create the database if missing, then the tables the model declares.

use crate::error::{AppError, ConfigError};
use crate::model::TABLES;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create every table in dependency order. Idempotent (`CREATE TABLE IF NOT EXISTS`).
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(count = TABLES.len(), "tables ready");
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database when it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::invalid("DATABASE_URL", database_url, e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::invalid("DATABASE_URL", url, "no database path"))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let query = path_and_query
        .find('?')
        .and_then(|i| path_and_query.get(i..))
        .unwrap_or("");
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres{}", base, query);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/voyagen").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "voyagen");
    }

    #[test]
    fn keeps_query_string_on_admin_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost/voyagen?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "voyagen");
    }

    #[test]
    fn url_without_path_is_a_config_error() {
        let err = parse_db_name_from_url("postgres://localhost").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DATABASE_URL", .. }));
    }

    #[tokio::test]
    async fn bootstrap_reports_bad_url_as_config_error() {
        let err = ensure_database_exists("postgres://localhost").await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("voy\"agen"), "\"voy\"\"agen\"");
    }
}
