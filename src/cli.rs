//! CLI command definitions and subcommands

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rostergen - sales-driven weekly staff roster generator
#[derive(Parser)]
#[command(name = "roster", about = "Generate and manage weekly staff rosters", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate schedules for a week from projected sales
    Generate {
        /// YAML file mapping day names to projected sales
        #[arg(short, long)]
        sales: PathBuf,

        /// Monday the week starts on (YYYY-MM-DD)
        #[arg(short, long)]
        week_start: NaiveDate,

        /// Seed for reproducible task assignment
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Inspect and manage schedule entries
    Schedules {
        #[command(subcommand)]
        command: ScheduleCommand,
    },

    /// Manage employees
    Employees {
        #[command(subcommand)]
        command: EmployeeCommand,
    },

    /// Manage the task catalog
    Tasks {
        #[command(subcommand)]
        command: TaskCommand,
    },

    /// Manage time-off requests
    Timeoff {
        #[command(subcommand)]
        command: TimeOffCommand,
    },
}

/// Schedule operations
#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// List active entries, optionally for one week
    List {
        /// Restrict to the week starting on this Monday
        #[arg(short, long)]
        week_start: Option<NaiveDate>,
    },

    /// Approve an entry
    Approve {
        /// Entry ID
        id: String,
    },

    /// Soft-delete an entry (marks it inactive)
    Delete {
        /// Entry ID
        id: String,
    },
}

/// Employee operations
#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Import employees from a YAML file
    Import {
        /// YAML file with a list of employees
        file: PathBuf,
    },

    /// List all employees
    List,
}

/// Task catalog operations
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Make sure the predefined catalog exists in storage
    Ensure,

    /// List all tasks
    List,
}

/// Time-off operations
#[derive(Debug, Subcommand)]
pub enum TimeOffCommand {
    /// File a new request
    Request {
        /// Requesting employee ID
        employee_id: String,

        /// First day off (YYYY-MM-DD)
        start_date: NaiveDate,

        /// Last day off, inclusive (YYYY-MM-DD)
        end_date: NaiveDate,

        /// Reason for the request
        #[arg(short, long)]
        reason: Option<String>,
    },

    /// List all requests
    List,

    /// Approve a request
    Approve {
        /// Request ID
        id: String,
    },

    /// Deny a request
    Deny {
        /// Request ID
        id: String,
    },
}
