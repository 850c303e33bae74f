//! Availability filter and assignment engine
//!
//! Takes one day's candidate employees and fills the morning and evening
//! shift quotas, assigning each selected employee a task by role. The RNG
//! is injected so tests can seed it.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use tracing::{debug, trace};

use crate::calendar::WeekWindow;
use crate::catalog::{TaskCatalog, TaskKey};
use crate::domain::{DayOfWeek, Employee, Role, ScheduleEntry, Shift, ShiftPreference, Task};
use crate::planner::StaffingPlan;

/// Default morning shift window when the employee declared no times
pub fn morning_default() -> (NaiveTime, NaiveTime) {
    (hm(8, 0), hm(14, 0))
}

/// Default afternoon/evening shift window
pub fn afternoon_default() -> (NaiveTime, NaiveTime) {
    (hm(14, 0), hm(20, 0))
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Pick a task for an employee by role
///
/// Managers always get the MANAGER task; kitchen managers split 50/50
/// between PREP and GRILL; crew members draw uniformly from the four floor
/// tasks; anything unrecognized defaults to LINE.
pub fn pick_task<'a, R: Rng + ?Sized>(role: Role, catalog: &'a TaskCatalog, rng: &mut R) -> &'a Task {
    match role {
        Role::GeneralManager | Role::ServiceManager => catalog.get(TaskKey::Manager),
        Role::KitchenManager => {
            if rng.random_bool(0.5) {
                catalog.get(TaskKey::Prep)
            } else {
                catalog.get(TaskKey::Grill)
            }
        }
        Role::CrewMember => {
            const CREW_TASKS: [TaskKey; 4] = [TaskKey::Line, TaskKey::Cashier, TaskKey::Prep, TaskKey::Grill];
            catalog.get(CREW_TASKS[rng.random_range(0..CREW_TASKS.len())])
        }
        Role::Other => catalog.get(TaskKey::Line),
    }
}

/// Assign shifts and tasks for one day
///
/// Candidates are taken in the order given (storage retrieval order; not
/// semantically meaningful since headcount is capped by quota, not
/// identity). Iteration stops once both quotas are full. Only morning and
/// afternoon preferences place an employee; evening and night preferences
/// are skipped: the planner recognizes two shift buckets even though four
/// preference values exist in the data model. Known gap, preserved on
/// purpose.
#[allow(clippy::too_many_arguments)]
pub fn assign_day<R: Rng + ?Sized>(
    day: DayOfWeek,
    date: NaiveDate,
    window: WeekWindow,
    projected_sales: f64,
    plan: StaffingPlan,
    candidates: &[Employee],
    catalog: &TaskCatalog,
    rng: &mut R,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();
    let mut morning_count = 0u32;
    let mut afternoon_count = 0u32;

    for employee in candidates {
        if morning_count >= plan.per_shift && afternoon_count >= plan.per_shift {
            break;
        }

        let availability = employee.availability.day(day);
        if availability.off {
            trace!(employee = %employee.id, %day, "skipping employee marked off");
            continue;
        }

        let task = pick_task(employee.role, catalog, rng);

        match employee.shift_preference {
            ShiftPreference::Morning if morning_count < plan.per_shift => {
                let (default_start, default_end) = morning_default();
                entries.push(ScheduleEntry::generated(
                    employee.id.clone(),
                    task.id.clone(),
                    Shift {
                        day,
                        date,
                        start_time: availability.start.unwrap_or(default_start),
                        end_time: availability.end.unwrap_or(default_end),
                    },
                    window.start,
                    window.end,
                    projected_sales,
                ));
                morning_count += 1;
            }
            ShiftPreference::Afternoon if afternoon_count < plan.per_shift => {
                let (default_start, default_end) = afternoon_default();
                entries.push(ScheduleEntry::generated(
                    employee.id.clone(),
                    task.id.clone(),
                    Shift {
                        day,
                        date,
                        start_time: availability.start.unwrap_or(default_start),
                        end_time: availability.end.unwrap_or(default_end),
                    },
                    window.start,
                    window.end,
                    projected_sales,
                ));
                afternoon_count += 1;
            }
            preference => {
                trace!(employee = %employee.id, %preference, "no bucket for preference or quota full, skipping");
            }
        }
    }

    debug!(
        %day,
        assigned = entries.len(),
        morning = morning_count,
        afternoon = afternoon_count,
        per_shift = plan.per_shift,
        "day assignment complete"
    );
    entries
}
