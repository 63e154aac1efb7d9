//! Render command: load the data files, plan, and write the calendar page.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use leave_planner::calculation::LeavePlanner;
use leave_planner::config::{ConfigLoader, PlannerConfig};
use leave_planner::input::load_inputs;
use leave_planner::render::{render_page, summary_lines};

use crate::cli::RenderArgs;

/// Run the file-based planning pipeline.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();

    let mut config = crate::load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let loader = ConfigLoader::from_config(config);
    let settings = loader.settings().context("invalid planner settings")?;
    let config = loader.into_config();

    let inputs = load_inputs(&config.inputs).context("failed to load input files")?;
    info!(
        public_holidays = inputs.public_holidays.len(),
        leave_ranges = inputs.leave_ranges.len(),
        "inputs loaded"
    );

    let plan = LeavePlanner::new(settings)
        .plan(&inputs)
        .context("failed to compute leave plan")?;
    let html = render_page(&plan, &config.title).context("failed to render calendar")?;

    // A failed write still prints the page.
    match fs::write(&config.output, &html) {
        Ok(()) => info!(path = %config.output.display(), "calendar written"),
        Err(e) => warn!(path = %config.output.display(), error = %e, "failed to write HTML file"),
    }

    println!("{html}");
    for line in summary_lines(&plan) {
        eprintln!("{line}");
    }
    Ok(())
}

fn apply_overrides(config: &mut PlannerConfig, args: RenderArgs) {
    if let Some(dir) = args.public_dir {
        config.inputs.public_holidays_dir = dir;
    }
    if let Some(csv) = args.csv {
        config.inputs.leave_ranges = csv;
    }
    if let Some(leave_csv) = args.leave_csv {
        config.inputs.entitlement = leave_csv;
    }
    if let Some(working_days) = args.working_days {
        config.working_days = working_days;
    }
    if let Some(out) = args.out {
        config.output = out;
    }
    if let Some(title) = args.title {
        config.title = title;
    }
    if let Some(scope) = args.show_years {
        config.show_years = scope;
    }
    if let Some(year) = args.current_year {
        config.current_year = Some(year);
    }
}
