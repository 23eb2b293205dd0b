//! Seller records: registration, lookup, admin edits and totals
//!
//! Sellers are the referral partners shown in the admin table. Each one gets
//! a unique coupon on registration and starts from zero sales with the
//! configured default goal.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::coupon::generate_coupon;
use crate::cpf::{format_cpf, validate_cpf};
use crate::error::{DashboardError, Result};
use crate::models::{AdminStats, NewSeller, Seller, SellerUpdate};

/// Give up on coupon generation after this many collisions
const MAX_COUPON_ATTEMPTS: usize = 200;

// ---------------------------------------------------------------------------
/// Queries
// ---------------------------------------------------------------------------

pub async fn get_seller(pool: &SqlitePool, id: i64) -> Result<Seller> {
    sqlx::query_as::<_, Seller>("SELECT * FROM sellers WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DashboardError::NotFound(format!("seller {}", id)))
}

/// All sellers, most recently registered first
pub async fn list_sellers(pool: &SqlitePool) -> Result<Vec<Seller>> {
    let sellers = sqlx::query_as::<_, Seller>("SELECT * FROM sellers ORDER BY id DESC")
        .fetch_all(pool)
        .await?;
    Ok(sellers)
}

pub async fn search_sellers(pool: &SqlitePool, term: &str) -> Result<Vec<Seller>> {
    let sellers = list_sellers(pool).await?;
    Ok(sellers
        .into_iter()
        .filter(|s| s.matches_search(term))
        .collect())
}

pub async fn admin_stats(pool: &SqlitePool) -> Result<AdminStats> {
    let stats = sqlx::query_as::<_, AdminStats>(
        r#"
        SELECT COUNT(*) AS total_sellers,
               COALESCE(SUM(total_sales), 0.0) AS total_sales,
               COALESCE(SUM(total_lists), 0) AS total_lists
        FROM sellers
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}

async fn cpf_registered(pool: &SqlitePool, cpf: &str) -> Result<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM sellers WHERE cpf = ?")
        .bind(cpf)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Which UNIQUE column an insert collided with
#[derive(Debug, PartialEq, Eq)]
enum Conflict {
    Coupon,
    Cpf,
}

fn unique_conflict(err: &sqlx::Error) -> Option<Conflict> {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            if db.message().contains("sellers.coupon") {
                Some(Conflict::Coupon)
            } else {
                Some(Conflict::Cpf)
            }
        }
        _ => None,
    }
}

/// Insert with a fresh coupon, drawing again whenever the coupon is taken.
/// A CPF collision at insert time is reported as `Duplicate`.
async fn insert_with_coupon(
    pool: &SqlitePool,
    config: &DashboardConfig,
    name: &str,
    cpf: &str,
) -> Result<(i64, String)> {
    for _ in 0..MAX_COUPON_ATTEMPTS {
        let coupon = generate_coupon(&config.coupon_prefix, name, &mut rand::thread_rng());
        let now = Utc::now();

        let inserted = sqlx::query(
            r#"
            INSERT INTO sellers (name, cpf, coupon, total_sales, total_lists, goal, created_at, updated_at)
            VALUES (?1, ?2, ?3, 0, 0, ?4, ?5, ?5)
            "#,
        )
        .bind(name)
        .bind(cpf)
        .bind(&coupon)
        .bind(config.default_goal)
        .bind(now)
        .execute(pool)
        .await;

        match inserted {
            Ok(result) => return Ok((result.last_insert_rowid(), coupon)),
            Err(e) => match unique_conflict(&e) {
                Some(Conflict::Coupon) => debug!(%coupon, "Coupon taken, drawing another"),
                Some(Conflict::Cpf) => return Err(DashboardError::Duplicate(format!("CPF {}", cpf))),
                None => return Err(e.into()),
            },
        }
    }
    Err(DashboardError::Duplicate(format!(
        "no free coupon left for name {:?}",
        name
    )))
}

// ---------------------------------------------------------------------------
/// Mutations
// ---------------------------------------------------------------------------

pub async fn create_seller(
    pool: &SqlitePool,
    config: &DashboardConfig,
    new_seller: NewSeller,
) -> Result<Seller> {
    let name = new_seller.name.trim();
    if name.is_empty() {
        return Err(DashboardError::Validation("name is required".into()));
    }
    if !validate_cpf(&new_seller.cpf) {
        return Err(DashboardError::Validation("CPF is invalid".into()));
    }

    let cpf = format_cpf(&new_seller.cpf);
    if cpf_registered(pool, &cpf).await? {
        return Err(DashboardError::Duplicate(format!("CPF {}", cpf)));
    }

    let (id, coupon) = insert_with_coupon(pool, config, name, &cpf).await?;
    info!(seller_id = id, %coupon, "Registered seller");
    get_seller(pool, id).await
}

/// Apply the fields present in `update`; returns the stored seller.
/// Absent fields keep their stored value within the single UPDATE.
pub async fn update_seller(pool: &SqlitePool, id: i64, update: SellerUpdate) -> Result<Seller> {
    if update.is_empty() {
        return get_seller(pool, id).await;
    }

    if let Some(total_sales) = update.total_sales {
        if !total_sales.is_finite() || total_sales < 0.0 {
            return Err(DashboardError::Validation("total sales must be zero or more".into()));
        }
    }
    if let Some(total_lists) = update.total_lists {
        if total_lists < 0 {
            return Err(DashboardError::Validation("total lists must be zero or more".into()));
        }
    }
    if let Some(goal) = update.goal {
        if !goal.is_finite() {
            return Err(DashboardError::Validation("goal must be a number".into()));
        }
        if goal <= 0.0 {
            // Allowed: progress math treats it as an already reached goal
            warn!(seller_id = id, goal, "Seller goal set to a non-positive value");
        }
    }

    let result = sqlx::query(
        r#"
        UPDATE sellers
        SET total_sales = COALESCE(?, total_sales),
            total_lists = COALESCE(?, total_lists),
            goal = COALESCE(?, goal),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(update.total_sales)
    .bind(update.total_lists)
    .bind(update.goal)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DashboardError::NotFound(format!("seller {}", id)));
    }
    info!(seller_id = id, "Updated seller totals");
    get_seller(pool, id).await
}

pub async fn delete_seller(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM sellers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DashboardError::NotFound(format!("seller {}", id)));
    }
    info!(seller_id = id, "Deleted seller");
    Ok(())
}
