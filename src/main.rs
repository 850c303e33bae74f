//! rostergen CLI entry point

use std::fs;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::info;

use rostergen::cli::{Cli, Command, EmployeeCommand, ScheduleCommand, TaskCommand, TimeOffCommand};
use rostergen::config::Config;
use rostergen::domain::{Employee, Role, ShiftPreference, TimeOffRequest, TimeOffStatus, WeekAvailability};
use rostergen::generator::{SalesData, ScheduleGenerator};
use rostergen::store::{EmployeeRepo, ScheduleRepo, Store, TaskRepo, TimeOffRepo};
use rostergen::ensure_catalog;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

/// Employee shape accepted by `employees import`
#[derive(Debug, Deserialize)]
struct EmployeeImport {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    shift_preference: ShiftPreference,
    #[serde(default)]
    availability: WeekAvailability,
}

impl EmployeeImport {
    fn into_employee(self) -> Employee {
        let mut employee = Employee::new(self.name, self.role)
            .with_preference(self.shift_preference)
            .with_availability(self.availability);
        if let Some(email) = self.email {
            employee = employee.with_email(email);
        }
        employee
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref())?;

    let store_path = config.storage.path.clone().unwrap_or_else(Store::default_path);
    let store = Arc::new(Store::open(store_path).context("Failed to open store")?);

    match cli.command {
        Command::Generate {
            sales,
            week_start,
            seed,
        } => {
            let content = fs::read_to_string(&sales).context(format!("Failed to read {}", sales.display()))?;
            let sales_data: SalesData = serde_yaml::from_str(&content).context("Failed to parse sales data")?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let generator = ScheduleGenerator::new(store.clone(), store.clone(), store.clone());
            let entries = generator.generate(&sales_data, week_start, &mut rng).await?;
            print_json(&entries)?;
        }

        Command::Schedules { command } => match command {
            ScheduleCommand::List { week_start } => {
                let entries = store.list_entries(week_start).await?;
                print_json(&entries)?;
            }
            ScheduleCommand::Approve { id } => {
                let entry = store.approve_entry(&id).await?;
                print_json(&entry)?;
            }
            ScheduleCommand::Delete { id } => {
                store.soft_delete_entry(&id).await?;
                info!(%id, "schedule entry soft-deleted");
            }
        },

        Command::Employees { command } => match command {
            EmployeeCommand::Import { file } => {
                let content = fs::read_to_string(&file).context(format!("Failed to read {}", file.display()))?;
                let imports: Vec<EmployeeImport> =
                    serde_yaml::from_str(&content).context("Failed to parse employee file")?;

                let mut inserted = Vec::new();
                for import in imports {
                    inserted.push(store.insert_employee(import.into_employee()).await?);
                }
                info!(count = inserted.len(), "employees imported");
                print_json(&inserted)?;
            }
            EmployeeCommand::List => {
                let employees = store.list_employees().await?;
                print_json(&employees)?;
            }
        },

        Command::Tasks { command } => match command {
            TaskCommand::Ensure => {
                ensure_catalog(store.as_ref()).await?;
                let tasks = store.list_tasks().await?;
                print_json(&tasks)?;
            }
            TaskCommand::List => {
                let tasks = store.list_tasks().await?;
                print_json(&tasks)?;
            }
        },

        Command::Timeoff { command } => match command {
            TimeOffCommand::Request {
                employee_id,
                start_date,
                end_date,
                reason,
            } => {
                let mut request = TimeOffRequest::new(employee_id, start_date, end_date);
                if let Some(reason) = reason {
                    request = request.with_reason(reason);
                }
                let request = store.create_request(request).await?;
                print_json(&request)?;
            }
            TimeOffCommand::List => {
                let requests = store.list_requests().await?;
                print_json(&requests)?;
            }
            TimeOffCommand::Approve { id } => {
                let request = store.set_request_status(&id, TimeOffStatus::Approved).await?;
                print_json(&request)?;
            }
            TimeOffCommand::Deny { id } => {
                let request = store.set_request_status(&id, TimeOffStatus::Denied).await?;
                print_json(&request)?;
            }
        },
    }

    Ok(())
}
