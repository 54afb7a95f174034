//! Application state for the document generator API

use anyhow::Result;
use docgen_core::TemplateStore;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub struct AppState {
    pub db: SqlitePool,
    pub templates: TemplateStore,
    /// Base URL used by the renderer to resolve relative resource
    /// references in template HTML.
    pub asset_base_url: Option<String>,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:docgen.db?mode=rwc".to_string());

        tracing::info!("Connecting to database: {}", db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        Self::run_migrations(&pool).await?;

        let template_dir =
            std::env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());
        let asset_base_url = std::env::var("ASSET_BASE_URL").ok();

        Ok(Self {
            db: pool,
            templates: TemplateStore::new(template_dir),
            asset_base_url,
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                document_type TEXT NOT NULL,
                filename TEXT NOT NULL,
                pdf_data BLOB NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Index for owner-scoped listings
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_owner ON documents(owner_id)
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}
