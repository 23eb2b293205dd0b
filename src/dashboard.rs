//! Personal dashboard view model
//!
//! Everything the seller's dashboard page shows in one serializable value,
//! so the frontend only formats and draws.

use serde::{Deserialize, Serialize};

use crate::milestones::{
  milestone_progress, reached_milestones, remaining_to_goal, total_progress_percentage,
  MilestoneMarker, ProgressResult,
};
use crate::models::Seller;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
  pub seller_id: i64,
  pub name: String,
  pub coupon: String,
  pub total_sales: f64,
  pub total_lists: i64,
  pub goal: f64,
  /// Milestone bar position
  pub progress: ProgressResult,
  /// Headline percent of goal
  pub total_percentage: f64,
  pub remaining: f64,
  pub milestones: Vec<MilestoneMarker>,
}

impl DashboardSummary {
  pub fn for_seller(seller: &Seller) -> Self {
    Self {
      seller_id: seller.id,
      name: seller.name.clone(),
      coupon: seller.coupon.clone(),
      total_sales: seller.total_sales,
      total_lists: seller.total_lists,
      goal: seller.goal,
      progress: milestone_progress(seller.total_sales, seller.goal),
      total_percentage: total_progress_percentage(seller.total_sales, seller.goal),
      remaining: remaining_to_goal(seller.total_sales, seller.goal),
      milestones: reached_milestones(seller.total_sales),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn seller(total_sales: f64, goal: f64) -> Seller {
    Seller {
      id: 3,
      name: "Davi Rocha".into(),
      cpf: "111.444.777-35".into(),
      coupon: "ODONTODAVIROCH11".into(),
      total_sales,
      total_lists: 4,
      goal,
      created_at: Utc::now(),
      updated_at: Utc::now(),
    }
  }

  #[test]
  fn test_summary_midway() {
    let summary = DashboardSummary::for_seller(&seller(25_000.0, 50_000.0));
    assert_eq!(summary.total_percentage, 50.0);
    assert_eq!(summary.remaining, 25_000.0);
    assert_eq!(summary.progress.current_milestone, 20_000.0);
    assert_eq!(summary.milestones.iter().filter(|m| m.reached).count(), 2);
  }

  #[test]
  fn test_summary_goal_exceeded() {
    let summary = DashboardSummary::for_seller(&seller(60_000.0, 50_000.0));
    assert_eq!(summary.progress.percentage, 100.0);
    assert_eq!(summary.total_percentage, 100.0);
    assert_eq!(summary.remaining, -10_000.0);
    assert!(summary.milestones.iter().all(|m| m.reached));
  }

  #[test]
  fn test_summary_zero_goal() {
    let summary = DashboardSummary::for_seller(&seller(0.0, 0.0));
    assert_eq!(summary.total_percentage, 0.0);
    assert_eq!(summary.progress.percentage, 100.0);
  }

  #[test]
  fn test_summary_json_shape() {
    let json = serde_json::to_value(DashboardSummary::for_seller(&seller(15_000.0, 50_000.0))).unwrap();
    assert_eq!(json["totalSales"], 15_000.0);
    assert_eq!(json["totalLists"], 4);
    assert_eq!(json["progress"]["segmentPercentage"], 50.0);
    assert_eq!(json["milestones"].as_array().map(|m| m.len()), Some(5));
  }
}
