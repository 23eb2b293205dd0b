//! Tauri commands for the admin seller table

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::error::DashboardError;
use crate::models::{AdminStats, NewSeller, Seller, SellerUpdate};
use crate::sellers as store;

#[tauri::command]
pub async fn list_sellers(state: State<'_, Arc<AppState>>) -> Result<Vec<Seller>, DashboardError> {
  store::list_sellers(&state.db).await
}

/// Filter by name, CPF or coupon
#[tauri::command]
pub async fn search_sellers(
  state: State<'_, Arc<AppState>>,
  term: String,
) -> Result<Vec<Seller>, DashboardError> {
  store::search_sellers(&state.db, &term).await
}

#[tauri::command]
pub async fn get_seller(
  state: State<'_, Arc<AppState>>,
  seller_id: i64,
) -> Result<Seller, DashboardError> {
  store::get_seller(&state.db, seller_id).await
}

/// Register a seller; coupon and goal are assigned here
#[tauri::command]
pub async fn create_seller(
  state: State<'_, Arc<AppState>>,
  name: String,
  cpf: String,
) -> Result<Seller, DashboardError> {
  store::create_seller(&state.db, &state.config, NewSeller { name, cpf }).await
}

#[tauri::command]
pub async fn update_seller(
  state: State<'_, Arc<AppState>>,
  seller_id: i64,
  update: SellerUpdate,
) -> Result<Seller, DashboardError> {
  store::update_seller(&state.db, seller_id, update).await
}

#[tauri::command]
pub async fn delete_seller(
  state: State<'_, Arc<AppState>>,
  seller_id: i64,
) -> Result<(), DashboardError> {
  store::delete_seller(&state.db, seller_id).await
}

#[tauri::command]
pub async fn get_admin_stats(state: State<'_, Arc<AppState>>) -> Result<AdminStats, DashboardError> {
  store::admin_stats(&state.db).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::DashboardConfig;
  use crate::test_utils::*;
  use serial_test::serial;
  use tauri::Manager;

  async fn mock_state() -> (tauri::App<tauri::test::MockRuntime>, sqlx::SqlitePool) {
    let pool = setup_test_db().await;
    let config = DashboardConfig {
      coupon_prefix: "PROMO".into(),
      default_goal: 30_000.0,
      ..DashboardConfig::default()
    };
    let app = tauri::test::mock_app();
    app.manage(Arc::new(AppState { db: pool.clone(), config }));
    (app, pool)
  }

  #[tokio::test]
  #[serial]
  async fn test_create_uses_configured_defaults() {
    let (app, pool) = mock_state().await;

    let seller = create_seller(app.state(), "Elisa Prado".into(), "529.982.247-25".into())
      .await
      .unwrap();
    assert!(seller.coupon.starts_with("PROMOELISAPRA"));
    assert_eq!(seller.goal, 30_000.0);

    let fetched = get_seller(app.state(), seller.id).await.unwrap();
    assert_eq!(fetched.cpf, "529.982.247-25");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_update_then_stats() {
    let (app, pool) = mock_state().await;
    let ids = seed_test_sellers(&pool).await;

    let update = SellerUpdate { total_sales: Some(10_000.0), total_lists: Some(1), goal: None };
    update_seller(app.state(), ids[0], update).await.unwrap();

    let stats = get_admin_stats(app.state()).await.unwrap();
    assert_eq!(stats.total_sellers, 4);
    assert_eq!(stats.total_sales, 97_500.0);
    assert_eq!(stats.total_lists, 32);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_search_and_delete() {
    let (app, pool) = mock_state().await;
    let ids = seed_test_sellers(&pool).await;

    let found = search_sellers(app.state(), "rocha".into()).await.unwrap();
    assert_eq!(found.len(), 1);

    delete_seller(app.state(), found[0].id).await.unwrap();
    let remaining = list_sellers(app.state()).await.unwrap();
    assert_eq!(remaining.len(), ids.len() - 1);
    assert!(remaining.iter().all(|s| s.name != "Davi Rocha"));

    teardown_test_db(pool).await;
  }
}
