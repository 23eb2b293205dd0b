pub mod commands;
pub mod config;
pub mod coupon;
pub mod cpf;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod milestones;
pub mod models;
pub mod ranking;
pub mod sellers;

#[cfg(test)]
mod test_utils;

pub use config::DashboardConfig;
pub use dashboard::DashboardSummary;
pub use error::DashboardError;
pub use milestones::{milestone_progress, total_progress_percentage, ProgressResult, MILESTONES};

use db::AppState;
use std::sync::Arc;
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};
use tracing::info;

/// Dashboard backend as a Tauri plugin; register it on the app builder
pub fn init<R: Runtime>() -> TauriPlugin<R> {
  Builder::new("referral-dashboard")
    .invoke_handler(tauri::generate_handler![
      // Progress commands
      commands::progress::compute_milestone_progress,
      commands::progress::compute_total_progress,
      commands::progress::get_seller_dashboard,
      // Ranking commands
      commands::ranking::get_top_ranking,
      // Admin commands
      commands::sellers::list_sellers,
      commands::sellers::search_sellers,
      commands::sellers::get_seller,
      commands::sellers::create_seller,
      commands::sellers::update_seller,
      commands::sellers::delete_seller,
      commands::sellers::get_admin_stats,
    ])
    .setup(|app, _api| {
      // Load environment variables from .env file
      dotenvy::dotenv().ok();
      let config = DashboardConfig::from_env()?;

      let pool = tauri::async_runtime::block_on(db::initialize_db(app, &config))?;
      app.manage(Arc::new(AppState { db: pool, config }));
      info!("Referral dashboard ready");
      Ok(())
    })
    .build()
}
