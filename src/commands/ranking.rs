//! Tauri command for the top sellers widget

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::error::DashboardError;
use crate::ranking::{top_ranking, RankingEntry};

/// Top sellers by total sales; `limit` defaults to the configured size
#[tauri::command]
pub async fn get_top_ranking(
  state: State<'_, Arc<AppState>>,
  limit: Option<usize>,
) -> Result<Vec<RankingEntry>, DashboardError> {
  let limit = limit.unwrap_or(state.config.ranking_limit);
  top_ranking(&state.db, limit).await
}
