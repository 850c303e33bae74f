//! Staffing planner
//!
//! Maps one day's projected sales to a headcount, split evenly between the
//! morning and evening shifts.

/// Sales above this need the full 12-person crew
pub const HIGH_SALES_THRESHOLD: f64 = 6000.0;

/// Sales above this (and at or below the high threshold) need 8
pub const MID_SALES_THRESHOLD: f64 = 4000.0;

/// Headcount for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffingPlan {
    /// Total employees for the day
    pub total: u32,

    /// Quota per shift bucket (morning and evening each)
    pub per_shift: u32,
}

/// Decide staffing from projected sales
///
/// The bands are strict greater-than comparisons: exactly 6000 falls into
/// the middle band and exactly 4000 into the bottom one. The strict
/// boundaries are intentional threshold semantics, not an off-by-one.
pub fn staffing_for_sales(projected_sales: f64) -> StaffingPlan {
    let total = if projected_sales > HIGH_SALES_THRESHOLD {
        12
    } else if projected_sales > MID_SALES_THRESHOLD {
        8
    } else {
        4
    };
    StaffingPlan {
        total,
        per_shift: total / 2,
    }
}
