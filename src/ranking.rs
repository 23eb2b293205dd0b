//! Top sellers widget: highest total sales, names and positions only

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
  /// Ordinal label, e.g. "1º"
  pub position: String,
  pub name: String,
}

/// Label names already sorted best-first
pub fn rank_entries<I>(names: I) -> Vec<RankingEntry>
where
  I: IntoIterator<Item = String>,
{
  names
    .into_iter()
    .enumerate()
    .map(|(i, name)| RankingEntry {
      position: format!("{}º", i + 1),
      name,
    })
    .collect()
}

/// Highest `total_sales` first; equal totals keep registration order
pub async fn top_ranking(pool: &SqlitePool, limit: usize) -> Result<Vec<RankingEntry>> {
  let limit = i64::try_from(limit).unwrap_or(i64::MAX);
  let names: Vec<(String,)> = sqlx::query_as(
    "SELECT name FROM sellers ORDER BY total_sales DESC, id ASC LIMIT ?",
  )
  .bind(limit)
  .fetch_all(pool)
  .await?;

  Ok(rank_entries(names.into_iter().map(|(name,)| name)))
}
