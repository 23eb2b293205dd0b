use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Seller {
  pub id: i64,
  pub name: String,
  /// Formatted as 000.000.000-00
  pub cpf: String,
  pub coupon: String,
  pub total_sales: f64,
  pub total_lists: i64,
  pub goal: f64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Seller {
  /// Case-insensitive substring match on name, CPF or coupon
  pub fn matches_search(&self, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
      return true;
    }
    self.name.to_lowercase().contains(&term)
      || self.cpf.to_lowercase().contains(&term)
      || self.coupon.to_lowercase().contains(&term)
  }
}

/// For registering a seller (coupon, totals and goal are assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeller {
  pub name: String,
  pub cpf: String,
}

/// Partial update from the admin table; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerUpdate {
  pub total_sales: Option<f64>,
  pub total_lists: Option<i64>,
  pub goal: Option<f64>,
}

impl SellerUpdate {
  pub fn is_empty(&self) -> bool {
    self.total_sales.is_none() && self.total_lists.is_none() && self.goal.is_none()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdminStats {
  pub total_sellers: i64,
  pub total_sales: f64,
  pub total_lists: i64,
}
