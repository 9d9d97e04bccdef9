//! `weekgrid` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the slot database.
//! - Map subcommands onto `ScheduleService` calls and print reports.

#![forbid(unsafe_code)]

mod config;
mod render;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Parser, Subcommand};
use config::AppConfig;
use log::info;
use std::path::PathBuf;
use weekgrid_core::db::open_db;
use weekgrid_core::{
    Category, ClockTime, ScheduleService, SlotRepository, SqliteSlotRepository, StateOrigin,
    BLOCKS_PER_CLOCK_DAY, BLOCKS_PER_DAY,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "weekgrid: plan a recurring week in 15-minute blocks",
    long_about = None
)]
struct Cli {
    /// Directory holding the schedule database and logs.
    #[arg(long, env = "WEEKGRID_DATA_DIR", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "WEEKGRID_LOG", global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print the weekly grid")]
    Show,

    #[command(about = "Print hours per category and per activity")]
    Totals,

    #[command(about = "List the available categories")]
    Categories,

    #[command(about = "Manage activities")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },

    #[command(about = "Assign or clear grid slots")]
    Slot {
        #[command(subcommand)]
        command: SlotCommand,
    },

    #[command(
        about = "Set the wake-up time shown for the first block",
        after_help = "EXAMPLES:\n    weekgrid wake \"6:30 AM\""
    )]
    Wake {
        /// Clock time such as `6:30 AM`.
        time: ClockTime,
    },

    #[command(about = "Write the schedule to a JSON file")]
    Export {
        /// Output path (defaults to `schedule-<timestamp>.json`).
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    #[command(about = "Replace the schedule with a JSON file")]
    Import {
        /// Snapshot file previously written by `export`.
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum ActivityCommand {
    /// Register a new activity.
    Add { name: String, category: Category },
    /// Move an activity to another category.
    Recategorize { name: String, category: Category },
    /// Rename an activity everywhere it is scheduled.
    Rename { old_name: String, new_name: String },
    /// Remove an activity that is not scheduled anywhere.
    Delete { name: String },
    /// List registered activities.
    List,
}

#[derive(Subcommand, Debug)]
enum SlotCommand {
    /// Assign an activity to a slot.
    Set {
        #[command(flatten)]
        target: SlotTarget,
        activity: String,
    },
    /// Clear a slot.
    Clear {
        #[command(flatten)]
        target: SlotTarget,
    },
}

#[derive(Args, Debug)]
struct SlotTarget {
    /// Day name (`monday`, `tue`) or index 0-6 starting Monday.
    #[arg(long, value_parser = parse_day)]
    day: usize,
    /// Grid row index, or a clock time such as `7:30 AM`.
    #[arg(long, value_name = "ROW|TIME")]
    at: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data_dir.clone(), cli.log_level.clone())?;
    config.ensure_dirs()?;

    if let Err(err) = weekgrid_core::init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        weekgrid_core::core_version()
    );

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let mut service = ScheduleService::open(SqliteSlotRepository::new(&conn))
        .context("failed to load schedule")?;
    if service.origin() == StateOrigin::Recovered {
        eprintln!("warning: stored schedule was invalid; starting from an empty schedule");
    }

    run(cli.command, &mut service)
}

fn run<R: SlotRepository>(command: Commands, service: &mut ScheduleService<R>) -> Result<()> {
    match command {
        Commands::Show => print!("{}", render::render_grid(service.state())),
        Commands::Totals => {
            let totals = service.totals()?;
            print!("{}", render::render_totals(service.state(), &totals));
        }
        Commands::Categories => print!("{}", render::render_categories()),
        Commands::Activity { command } => run_activity(command, service)?,
        Commands::Slot { command } => run_slot(command, service)?,
        Commands::Wake { time } => {
            service.set_wake_time(time)?;
            println!("wake-up time set to {time}");
        }
        Commands::Export { output } => {
            let path = output.unwrap_or_else(default_export_path);
            service
                .export_to(&path)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            println!("exported {}", path.display());
        }
        Commands::Import { path } => {
            service
                .import_from(&path)
                .with_context(|| format!("failed to import {}", path.display()))?;
            println!("imported {}", path.display());
        }
    }
    Ok(())
}

fn run_activity<R: SlotRepository>(
    command: ActivityCommand,
    service: &mut ScheduleService<R>,
) -> Result<()> {
    match command {
        ActivityCommand::Add { name, category } => {
            service.create_activity(&name, category)?;
            println!("created {name} ({category})");
        }
        ActivityCommand::Recategorize { name, category } => {
            service.recategorize_activity(&name, category)?;
            println!("{name} is now {category}");
        }
        ActivityCommand::Rename { old_name, new_name } => {
            service.rename_activity(&old_name, &new_name)?;
            println!("renamed {old_name} to {new_name}");
        }
        ActivityCommand::Delete { name } => {
            service.delete_activity(&name)?;
            println!("deleted {name}");
        }
        ActivityCommand::List => print!("{}", render::render_activities(service.state())),
    }
    Ok(())
}

fn run_slot<R: SlotRepository>(command: SlotCommand, service: &mut ScheduleService<R>) -> Result<()> {
    match command {
        SlotCommand::Set { target, activity } => {
            let block = resolve_row(&target.at, service.state().wake_offset())?;
            service.set_time_slot(target.day, block, Some(activity.as_str()))?;
            println!(
                "{} row {block}: {activity}",
                render::DAY_NAMES[target.day]
            );
        }
        SlotCommand::Clear { target } => {
            let block = resolve_row(&target.at, service.state().wake_offset())?;
            service.set_time_slot(target.day, block, None)?;
            println!("{} row {block}: cleared", render::DAY_NAMES[target.day]);
        }
    }
    Ok(())
}

fn parse_day(value: &str) -> Result<usize, String> {
    if let Ok(index) = value.parse::<usize>() {
        if index < render::DAY_NAMES.len() {
            return Ok(index);
        }
        return Err(format!("day index must be 0-6, got {index}"));
    }

    let wanted = value.trim().to_ascii_lowercase();
    render::DAY_NAMES
        .iter()
        .position(|day| {
            let day = day.to_ascii_lowercase();
            wanted.len() >= 3 && day.starts_with(&wanted)
        })
        .ok_or_else(|| format!("unknown day `{value}`"))
}

/// Grid row for `at`, given as a row index or as a clock time within the
/// scheduled part of the day.
fn resolve_row(at: &str, wake_offset: usize) -> Result<usize> {
    if let Ok(row) = at.trim().parse::<usize>() {
        return Ok(row);
    }
    let time = at
        .parse::<ClockTime>()
        .with_context(|| format!("`{at}` is neither a row index nor a clock time"))?;
    let row = (time.block_index() + BLOCKS_PER_CLOCK_DAY - wake_offset) % BLOCKS_PER_CLOCK_DAY;
    if row >= BLOCKS_PER_DAY {
        bail!("{time} falls outside the scheduled day");
    }
    Ok(row)
}

fn default_export_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%m-%d-%Y_%I-%M-%S_%p");
    PathBuf::from(format!("schedule-{stamp}.json"))
}
