//! Integration tests for the weekly schedule generator
//!
//! These pin "today" to Wednesday 2026-08-19, so the current week starts
//! Monday 2026-08-17 and the first open generation slot is 2026-08-24.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rostergen::domain::{DayAvailability, DayOfWeek, Employee, Role, ShiftPreference, WeekAvailability};
use rostergen::generator::{GenerateError, SalesData, ScheduleGenerator};
use rostergen::store::{EmployeeRepo, ScheduleRepo, Store, TaskRepo};
use rostergen::{TaskKey, ensure_catalog};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 8, 19)
}

fn next_monday() -> NaiveDate {
    date(2026, 8, 24)
}

fn crew(name: &str, preference: ShiftPreference) -> Employee {
    Employee::new(name, Role::CrewMember).with_preference(preference)
}

fn generator(store: &Arc<Store>) -> ScheduleGenerator {
    ScheduleGenerator::new(store.clone(), store.clone(), store.clone())
}

/// A store with 8 morning-preferring and 8 afternoon-preferring crew members
async fn staffed_store() -> Arc<Store> {
    let store = Arc::new(Store::in_memory());
    for i in 0..8 {
        store
            .insert_employee(crew(&format!("am-{}", i), ShiftPreference::Morning))
            .await
            .unwrap();
        store
            .insert_employee(crew(&format!("pm-{}", i), ShiftPreference::Afternoon))
            .await
            .unwrap();
    }
    store
}

fn sales(pairs: &[(DayOfWeek, f64)]) -> SalesData {
    pairs.iter().copied().collect()
}

#[tokio::test]
async fn test_high_sales_monday_fills_twelve_slots() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(42);

    let entries = generator(&store)
        .generate_at(&sales(&[(DayOfWeek::Monday, 7000.0)]), next_monday(), today(), &mut rng)
        .await
        .unwrap();

    assert_eq!(entries.len(), 12);
    for entry in &entries {
        assert_eq!(entry.projected_sales, 7000.0);
        assert!(entry.is_approved);
        assert_eq!(entry.shift.day, DayOfWeek::Monday);
        assert_eq!(entry.shift.date, next_monday());
        assert_eq!(entry.week_start, next_monday());
        assert_eq!(entry.week_end, next_monday() + Duration::days(6));
        assert!(entry.week_start <= entry.shift.date && entry.shift.date <= entry.week_end);
    }

    // Entries were persisted, not just returned
    let persisted = store.list_entries(Some(next_monday())).await.unwrap();
    assert_eq!(persisted.len(), 12);
}

#[tokio::test]
async fn test_past_week_rejected() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(1);

    let result = generator(&store)
        .generate_at(&sales(&[(DayOfWeek::Monday, 5000.0)]), date(2026, 8, 10), today(), &mut rng)
        .await;

    assert!(matches!(result, Err(GenerateError::PastWeek { .. })));
}

#[tokio::test]
async fn test_current_week_rejected_as_too_soon() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(1);

    // The current week passes the past-week check but is before the next open slot
    let result = generator(&store)
        .generate_at(&sales(&[(DayOfWeek::Monday, 5000.0)]), date(2026, 8, 17), today(), &mut rng)
        .await;

    match result {
        Err(GenerateError::WeekTooSoon { next_available, .. }) => {
            assert_eq!(next_available, next_monday());
        }
        other => panic!("expected WeekTooSoon, got {:?}", other.map(|e| e.len())),
    }
}

#[tokio::test]
async fn test_generated_week_cannot_be_generated_again() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(9);
    let generator = generator(&store);
    let data = sales(&[(DayOfWeek::Monday, 5000.0)]);

    generator
        .generate_at(&data, next_monday(), today(), &mut rng)
        .await
        .unwrap();

    // Same week again: the slot has moved one week forward
    let repeat = generator.generate_at(&data, next_monday(), today(), &mut rng).await;
    match repeat {
        Err(GenerateError::WeekTooSoon { next_available, .. }) => {
            assert_eq!(next_available, next_monday() + Duration::days(7));
        }
        other => panic!("expected WeekTooSoon, got {:?}", other.map(|e| e.len())),
    }

    // The week after is open
    let next = generator
        .generate_at(&data, next_monday() + Duration::days(7), today(), &mut rng)
        .await
        .unwrap();
    assert!(!next.is_empty());
}

#[tokio::test]
async fn test_empty_sales_rejected() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(1);

    let result = generator(&store)
        .generate_at(&SalesData::new(), next_monday(), today(), &mut rng)
        .await;

    assert!(matches!(result, Err(GenerateError::InvalidInput)));
}

#[tokio::test]
async fn test_off_employees_never_scheduled() {
    let store = Arc::new(Store::in_memory());

    let mut availability = WeekAvailability::default();
    *availability.day_mut(DayOfWeek::Tuesday) = DayAvailability::off();
    let off_tuesday = Employee::new("off-tuesday", Role::CrewMember).with_availability(availability);
    let off_id = off_tuesday.id.clone();
    store.insert_employee(off_tuesday).await.unwrap();
    for i in 0..3 {
        store
            .insert_employee(crew(&format!("am-{}", i), ShiftPreference::Morning))
            .await
            .unwrap();
    }

    let mut rng = StdRng::seed_from_u64(17);
    let entries = generator(&store)
        .generate_at(&sales(&[(DayOfWeek::Tuesday, 3000.0)]), next_monday(), today(), &mut rng)
        .await
        .unwrap();

    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.employee_id != off_id));
}

#[tokio::test]
async fn test_only_listed_days_get_schedules() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(23);

    let entries = generator(&store)
        .generate_at(
            &sales(&[
                (DayOfWeek::Monday, 7000.0),
                (DayOfWeek::Wednesday, 5000.0),
                (DayOfWeek::Friday, 3000.0),
            ]),
            next_monday(),
            today(),
            &mut rng,
        )
        .await
        .unwrap();

    let count_for = |day: DayOfWeek| entries.iter().filter(|e| e.shift.day == day).count();
    assert_eq!(count_for(DayOfWeek::Monday), 12);
    assert_eq!(count_for(DayOfWeek::Wednesday), 8);
    assert_eq!(count_for(DayOfWeek::Friday), 4);
    assert_eq!(count_for(DayOfWeek::Tuesday), 0);

    // Dates advance with the day label
    assert!(
        entries
            .iter()
            .filter(|e| e.shift.day == DayOfWeek::Friday)
            .all(|e| e.shift.date == next_monday() + Duration::days(4))
    );
}

#[tokio::test]
async fn test_catalog_ensure_idempotent() {
    let store = Store::in_memory();

    let first = ensure_catalog(&store).await.unwrap();
    let second = ensure_catalog(&store).await.unwrap();

    // Same records resolved both times, no duplicates created
    for key in [TaskKey::Line, TaskKey::Cashier, TaskKey::Grill, TaskKey::Prep, TaskKey::Manager] {
        assert_eq!(first.get(key).id, second.get(key).id);
    }
    assert_eq!(store.list_tasks().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_generation_syncs_catalog() {
    let store = staffed_store().await;
    let mut rng = StdRng::seed_from_u64(4);

    generator(&store)
        .generate_at(&sales(&[(DayOfWeek::Monday, 1000.0)]), next_monday(), today(), &mut rng)
        .await
        .unwrap();

    let tasks = store.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 5);
    let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
    for name in ["Line", "Cashier", "Grill", "Prep", "Manager"] {
        assert!(names.contains(&name), "missing catalog task {}", name);
    }
}
