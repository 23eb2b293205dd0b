use std::env;

use tracing::debug;

use crate::error::{DashboardError, Result};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const DEFAULT_GOAL: f64 = 50_000.0;
pub const DEFAULT_COUPON_PREFIX: &str = "ODONTO";
pub const DEFAULT_RANKING_LIMIT: usize = 3;
pub const DEFAULT_DB_FILE: &str = "referral-dashboard.db";

const GOAL_VAR: &str = "DASHBOARD_DEFAULT_GOAL";
const COUPON_PREFIX_VAR: &str = "DASHBOARD_COUPON_PREFIX";
const RANKING_LIMIT_VAR: &str = "DASHBOARD_RANKING_LIMIT";
const DB_FILE_VAR: &str = "DASHBOARD_DB_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
  /// Goal assigned to newly registered sellers
  pub default_goal: f64,
  pub coupon_prefix: String,
  /// How many sellers the ranking widget shows
  pub ranking_limit: usize,
  /// Database file name inside the app data directory
  pub db_file: String,
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      default_goal: DEFAULT_GOAL,
      coupon_prefix: DEFAULT_COUPON_PREFIX.to_string(),
      ranking_limit: DEFAULT_RANKING_LIMIT,
      db_file: DEFAULT_DB_FILE.to_string(),
    }
  }
}

impl DashboardConfig {
  /// Read overrides from the environment, falling back to defaults for unset vars
  pub fn from_env() -> Result<Self> {
    let defaults = Self::default();

    let default_goal = match env::var(GOAL_VAR) {
      Ok(raw) => {
        let goal: f64 = raw
          .trim()
          .parse()
          .map_err(|_| DashboardError::Config(format!("{} is not a number: {}", GOAL_VAR, raw)))?;
        if !goal.is_finite() || goal <= 0.0 {
          return Err(DashboardError::Config(format!("{} must be positive", GOAL_VAR)));
        }
        goal
      }
      Err(_) => defaults.default_goal,
    };

    let ranking_limit = match env::var(RANKING_LIMIT_VAR) {
      Ok(raw) => {
        let limit: usize = raw.trim().parse().map_err(|_| {
          DashboardError::Config(format!("{} is not a count: {}", RANKING_LIMIT_VAR, raw))
        })?;
        if limit == 0 {
          return Err(DashboardError::Config(format!("{} must be at least 1", RANKING_LIMIT_VAR)));
        }
        limit
      }
      Err(_) => defaults.ranking_limit,
    };

    let coupon_prefix = env::var(COUPON_PREFIX_VAR)
      .map(|p| p.trim().to_uppercase())
      .ok()
      .filter(|p| !p.is_empty())
      .unwrap_or(defaults.coupon_prefix);

    let db_file = env::var(DB_FILE_VAR)
      .ok()
      .filter(|f| !f.trim().is_empty())
      .unwrap_or(defaults.db_file);

    let config = Self {
      default_goal,
      coupon_prefix,
      ranking_limit,
      db_file,
    };
    debug!(?config, "Loaded dashboard configuration");
    Ok(config)
  }
}
