//! Test utilities shared by the store and command tests
//!
//! - In-memory database setup/teardown
//! - Seller fixtures

use chrono::Utc;
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) so every query sees the same in-memory database
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed four sellers with known totals
/// Returns their IDs in insertion order
///
/// | name        | sales  | lists |
/// |-------------|--------|-------|
/// | Ana Souza   | 42000  | 12    |
/// | Bruno Alves | 30500  | 10    |
/// | Carla Dias  | 15000  | 9     |
/// | Davi Rocha  | 8000   | 6     |
pub async fn seed_test_sellers(pool: &SqlitePool) -> Vec<i64> {
  let sellers = [
    ("Davi Rocha", "111.444.777-35", "ODONTODAVIROCH11", 8_000.0, 6),
    ("Ana Souza", "529.982.247-25", "ODONTOANASOUZA22", 42_000.0, 12),
    ("Carla Dias", "390.533.447-05", "ODONTOCARLADIA33", 15_000.0, 9),
    ("Bruno Alves", "153.509.460-56", "ODONTOBRUNOALV44", 30_500.0, 10),
  ];

  let mut ids = Vec::new();
  for (name, cpf, coupon, total_sales, total_lists) in sellers {
    let now = Utc::now();
    let result = sqlx::query(
      r#"
      INSERT INTO sellers (name, cpf, coupon, total_sales, total_lists, goal, created_at, updated_at)
      VALUES (?1, ?2, ?3, ?4, ?5, 50000, ?6, ?6)
      "#,
    )
    .bind(name)
    .bind(cpf)
    .bind(coupon)
    .bind(total_sales)
    .bind(total_lists as i64)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert test seller");

    ids.push(result.last_insert_rowid());
  }

  ids
}
