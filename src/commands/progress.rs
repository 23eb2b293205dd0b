//! Tauri commands for the seller's progress bar and headline figures

use std::sync::Arc;
use tauri::State;

use crate::dashboard::DashboardSummary;
use crate::db::AppState;
use crate::error::DashboardError;
use crate::milestones::{milestone_progress, total_progress_percentage, ProgressResult};
use crate::sellers::get_seller;

/// Milestone bar position for arbitrary figures
#[tauri::command]
pub fn compute_milestone_progress(total_sales: f64, goal: f64) -> ProgressResult {
  milestone_progress(total_sales, goal)
}

/// Headline percent of goal
#[tauri::command]
pub fn compute_total_progress(total_sales: f64, goal: f64) -> f64 {
  total_progress_percentage(total_sales, goal)
}

/// Full dashboard view for one seller
#[tauri::command]
pub async fn get_seller_dashboard(
  state: State<'_, Arc<AppState>>,
  seller_id: i64,
) -> Result<DashboardSummary, DashboardError> {
  let seller = get_seller(&state.db, seller_id).await?;
  Ok(DashboardSummary::for_seller(&seller))
}
