//! Milestone-Based Progress Engine
//!
//! Maps a seller's cumulative sales and personal goal onto the dashboard's
//! progress bar. The bar is split into equal-width segments between fixed
//! milestones; inside a segment the fill is interpolated linearly.
//!
//! Key rules:
//! - Reaching the goal fills the bar, whatever the scale says
//! - Past the last milestone the segment ends at the goal itself
//! - Every output is clamped to 0-100, no input is an error

use serde::{Deserialize, Serialize};

/// Cumulative sales checkpoints, in currency units
pub const MILESTONES: [f64; 6] = [0.0, 10_000.0, 20_000.0, 30_000.0, 40_000.0, 50_000.0];

/// Number of equal-width segments on the bar
const SEGMENT_COUNT: usize = MILESTONES.len() - 1;

/// Bar width (in percentage points) covered by one segment
const SEGMENT_WIDTH: f64 = 100.0 / SEGMENT_COUNT as f64;

// ---------------------------------------------------------------------------
/// Progress Result: display model for the progress bar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResult {
    /// Fill of the whole bar (0-100)
    pub percentage: f64,
    /// Fill of the current segment (0-100)
    pub segment_percentage: f64,
    pub current_milestone: f64,
    pub next_milestone: f64,
}

impl ProgressResult {
    fn goal_reached() -> Self {
        let top = MILESTONES[SEGMENT_COUNT];
        Self {
            percentage: 100.0,
            segment_percentage: 100.0,
            current_milestone: top,
            next_milestone: top,
        }
    }
}

/// One marker dot under the bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneMarker {
    pub value: f64,
    pub reached: bool,
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Headline "percent of goal" figure, independent of the milestone bar
pub fn total_progress_percentage(total_sales: f64, goal: f64) -> f64 {
    if goal.is_nan() || goal <= 0.0 {
        return 0.0;
    }
    clamp_percent(total_sales / goal * 100.0)
}

/// Index of the highest milestone at or below `total_sales`
fn milestone_index(total_sales: f64) -> usize {
    MILESTONES
        .iter()
        .rposition(|&m| m <= total_sales)
        .unwrap_or(0)
}

/// Position on the milestone bar for the given sales and goal
pub fn milestone_progress(total_sales: f64, goal: f64) -> ProgressResult {
    if total_sales >= goal {
        return ProgressResult::goal_reached();
    }

    let index = milestone_index(total_sales);
    let current = MILESTONES[index];
    let next = MILESTONES.get(index + 1).copied().unwrap_or(goal);

    let segment_range = next - current;
    let segment_percentage = if segment_range > 0.0 {
        clamp_percent((total_sales - current) / segment_range * 100.0)
    } else {
        0.0
    };

    let milestone_percentage = index as f64 * 100.0 / SEGMENT_COUNT as f64;
    let percentage = clamp_percent(milestone_percentage + segment_percentage * SEGMENT_WIDTH / 100.0);

    ProgressResult {
        percentage,
        segment_percentage,
        current_milestone: current,
        next_milestone: next,
    }
}

/// Marker state for every milestone above zero
pub fn reached_milestones(total_sales: f64) -> Vec<MilestoneMarker> {
    MILESTONES[1..]
        .iter()
        .map(|&value| MilestoneMarker {
            value,
            reached: total_sales >= value,
        })
        .collect()
}

/// Amount still missing to the goal (negative once exceeded)
pub fn remaining_to_goal(total_sales: f64, goal: f64) -> f64 {
    goal - total_sales
}
