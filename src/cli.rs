use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use leave_planner::models::DisplayScope;

/// Leave planner: working days, public holidays and planned leave on one
/// calendar.
#[derive(Parser)]
#[command(
    name = "leave-planner",
    version,
    about = "Plan leave and render an HTML calendar of working days, public holidays and planned leave"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load the data files, compute the plan and render the calendar.
    Render(RenderArgs),
    /// Serve the planner over HTTP.
    Serve(ServeArgs),
}

/// Arguments for the `render` subcommand. Flags override the config file.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Path to YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing public-holidays-sg-<year>.ics files.
    #[arg(long = "public-dir")]
    pub public_dir: Option<PathBuf>,

    /// File listing leave ranges like yyyymmdd-yyyymmdd, comma or newline separated.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// File holding package,carry_over,misc,cap.
    #[arg(long = "leave-csv")]
    pub leave_csv: Option<PathBuf>,

    /// Seven 0/1 characters (Mon..Sun) marking working days.
    #[arg(long = "working-days")]
    pub working_days: Option<String>,

    /// Output HTML file path.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Title for the generated page.
    #[arg(long)]
    pub title: Option<String>,

    /// Which year(s) to show: current, next or both.
    #[arg(long = "show-years")]
    pub show_years: Option<DisplayScope>,

    /// Override the current year (defaults to today's year).
    #[arg(long = "current-year")]
    pub current_year: Option<i32>,
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Path to YAML configuration file supplying request defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,
}
