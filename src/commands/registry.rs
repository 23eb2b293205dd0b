// Plugin command names; build.rs generates an `allow-*` permission for each.
// Keep in step with the `generate_handler!` list in lib.rs.
pub const COMMANDS: &[&str] = &[
  "compute_milestone_progress",
  "compute_total_progress",
  "get_seller_dashboard",
  "get_top_ranking",
  "list_sellers",
  "search_sellers",
  "get_seller",
  "create_seller",
  "update_seller",
  "delete_seller",
  "get_admin_stats",
];
