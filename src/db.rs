use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::info;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool
pub struct AppState {
  pub db: DbPool,
  pub config: DashboardConfig,
}

/// Get the path to the database file inside the app data directory
fn get_db_path<R: tauri::Runtime>(app: &tauri::AppHandle<R>, config: &DashboardConfig) -> Result<PathBuf> {
  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| DashboardError::Config(format!("Failed to get app data dir: {}", e)))?;

  fs::create_dir_all(&data_dir)
    .map_err(|e| DashboardError::Config(format!("Failed to create {}: {}", data_dir.display(), e)))?;

  Ok(data_dir.join(&config.db_file))
}

/// Open a pool on `db_url` and run migrations
pub async fn connect(db_url: &str) -> Result<DbPool> {
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  Ok(pool)
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
  config: &DashboardConfig,
) -> Result<DbPool> {
  let db_path = get_db_path(app, config)?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  info!(path = %db_path.display(), "Initializing database");
  let pool = connect(&db_url).await?;
  info!("Database initialized successfully");

  Ok(pool)
}
