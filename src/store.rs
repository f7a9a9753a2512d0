//! Database bootstrap: create the database if missing, table DDL, and the
//! dev-mode admin seed. DDL is idempotent (IF NOT EXISTS) and runs at startup.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        display_name TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'viewer',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS events (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title JSONB NOT NULL,
        description JSONB NOT NULL,
        category TEXT NOT NULL,
        location TEXT,
        starts_at TIMESTAMPTZ NOT NULL,
        ends_at TIMESTAMPTZ,
        capacity INTEGER,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS event_rsvps (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        party_size INTEGER NOT NULL DEFAULT 1,
        message TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sermons (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title JSONB NOT NULL,
        description JSONB NOT NULL,
        speaker TEXT NOT NULL,
        category TEXT NOT NULL,
        video_url TEXT,
        preached_at TIMESTAMPTZ NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ministries (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name JSONB NOT NULL,
        description JSONB NOT NULL,
        leader TEXT,
        contact_email TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS contact_messages (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        subject TEXT,
        message TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

const INDEX_DDL: &[&str] = &[
    // One RSVP per email per event, enforced at the store as well as in the
    // transaction guard.
    "CREATE UNIQUE INDEX IF NOT EXISTS event_rsvps_event_email \
     ON event_rsvps (event_id, lower(email))",
    "CREATE INDEX IF NOT EXISTS events_starts_at ON events (starts_at)",
    "CREATE INDEX IF NOT EXISTS events_category ON events (category)",
    "CREATE INDEX IF NOT EXISTS sermons_category ON sermons (category)",
    "CREATE INDEX IF NOT EXISTS sermons_speaker ON sermons (speaker)",
];

/// Create all tables and indexes if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEX_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Insert the bootstrap admin if configured and not already present, so the
/// back-office is reachable on first boot.
pub async fn seed_admin(pool: &PgPool, config: &ServerConfig) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (
        config.seed_admin_email.as_deref(),
        config.seed_admin_password.as_deref(),
    ) else {
        return Ok(());
    };
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE lower(email) = lower($1))")
            .bind(email)
            .fetch_one(pool)
            .await?;
    if exists.0 {
        return Ok(());
    }
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("bcrypt: {}", e)))?;
    sqlx::query(
        "INSERT INTO users (email, password_hash, display_name, role) VALUES ($1, $2, $3, 'admin')",
    )
    .bind(email)
    .bind(&hash)
    .bind("Administrator")
    .execute(pool)
    .await?;
    tracing::info!(email, "seeded bootstrap admin");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url);
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> (String, String) {
    // Only the path after the authority names a database; a URL like
    // postgres://localhost has none, and the host must not be mistaken for one.
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    let Some(slash) = url[after_scheme..].find('/') else {
        return (format!("{}/postgres", url), String::new());
    };
    let path_start = after_scheme + slash + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    (admin_url, db_name.to_string())
}

// PostgreSQL quoted identifiers escape an embedded double quote by doubling
// it; backslashes carry no meaning inside the quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
