//! Weekly schedule generator
//!
//! Orchestrates one generation request: validate the requested week against
//! the calendar rules, sync the task catalog, then plan and assign each day
//! present in the sales data, and finally bulk-persist the entries.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::assignment::assign_day;
use crate::calendar::{WeekWindow, date_for, next_available_week_start, start_of_week};
use crate::catalog::ensure_catalog;
use crate::domain::{DayOfWeek, ScheduleEntry};
use crate::planner::staffing_for_sales;
use crate::store::{EmployeeRepo, ScheduleRepo, StoreError, TaskRepo};

/// Projected sales keyed by day label; only listed days get schedules
pub type SalesData = BTreeMap<DayOfWeek, f64>;

/// Errors from a generation request
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("sales data and week start date are required to generate schedules")]
    InvalidInput,

    #[error("cannot generate schedules for past weeks (requested {requested}, current week starts {current_week_start})")]
    PastWeek {
        requested: NaiveDate,
        current_week_start: NaiveDate,
    },

    #[error("week already scheduled or not yet open; the next available week starts on {next_available}")]
    WeekTooSoon {
        requested: NaiveDate,
        next_available: NaiveDate,
    },

    #[error("failed to generate schedules: {0}")]
    Store(#[from] StoreError),
}

/// The schedule generator
///
/// Holds the three repositories it reads and writes. One generation request
/// runs to completion sequentially; days and employees are never processed
/// in parallel.
pub struct ScheduleGenerator {
    employees: Arc<dyn EmployeeRepo>,
    tasks: Arc<dyn TaskRepo>,
    schedules: Arc<dyn ScheduleRepo>,
}

impl ScheduleGenerator {
    /// Create a generator over the given repositories
    pub fn new(employees: Arc<dyn EmployeeRepo>, tasks: Arc<dyn TaskRepo>, schedules: Arc<dyn ScheduleRepo>) -> Self {
        Self {
            employees,
            tasks,
            schedules,
        }
    }

    /// Generate schedules for the week starting at `week_start`
    ///
    /// Returns every generated entry, already persisted. The bulk write is
    /// best-effort: a failure partway through leaves already-written
    /// entries in place (known limitation, no rollback).
    pub async fn generate<R: Rng + ?Sized>(
        &self,
        sales: &SalesData,
        week_start: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<ScheduleEntry>, GenerateError> {
        self.generate_at(sales, week_start, Utc::now().date_naive(), rng).await
    }

    /// Generation with an explicit "today", so callers and tests can pin
    /// the current-week boundary
    pub async fn generate_at<R: Rng + ?Sized>(
        &self,
        sales: &SalesData,
        week_start: NaiveDate,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<ScheduleEntry>, GenerateError> {
        debug!(%week_start, %today, days = sales.len(), "generation requested");

        // Validate
        if sales.is_empty() {
            return Err(GenerateError::InvalidInput);
        }

        let current_week_start = start_of_week(today);
        if week_start < current_week_start {
            return Err(GenerateError::PastWeek {
                requested: week_start,
                current_week_start,
            });
        }

        let latest_generated = self.schedules.latest_week_start_from(current_week_start).await?;
        let next_available = next_available_week_start(latest_generated, today);
        if week_start < next_available {
            return Err(GenerateError::WeekTooSoon {
                requested: week_start,
                next_available,
            });
        }

        // Prepare
        let catalog = ensure_catalog(self.tasks.as_ref()).await?;
        let window = WeekWindow::of(week_start);

        // Generate
        let mut entries = Vec::new();
        for (&day, &projected_sales) in sales {
            let plan = staffing_for_sales(projected_sales);
            let candidates = self.employees.find_available_on(day).await?;
            debug!(%day, projected_sales, total = plan.total, candidates = candidates.len(), "planning day");

            let date = date_for(week_start, day);
            entries.extend(assign_day(
                day,
                date,
                window,
                projected_sales,
                plan,
                &candidates,
                &catalog,
                rng,
            ));
        }

        // Persist
        self.schedules.insert_many(&entries).await?;

        info!(%week_start, count = entries.len(), "weekly schedule generated");
        Ok(entries)
    }
}
