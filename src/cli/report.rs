//! Report command implementation

use crate::cli::output::format_report_pretty;
use crate::cli::ReportArgs;
use crate::config::VigilConfig;
use crate::logging::init_tracing;
use crate::report;
use crate::store::open_board;
use anyhow::Context;
use chrono::Utc;
use tracing::debug;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &ReportArgs) -> Result<VigilConfig, anyhow::Error> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        VigilConfig::load(Some(&args.config))?
    } else {
        debug!("Config file not found, using defaults");
        VigilConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(ref model) = args.model {
        config.monitor.model = model.clone();
    }
    if let Some(ref data) = args.data {
        config.monitor.data = data.clone();
    }
    if let Some(period_days) = args.period_days {
        config.monitor.period_days = period_days;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Handle `vigil report` command
pub fn handle_report(args: &ReportArgs) -> Result<String, anyhow::Error> {
    let config = load_config_with_overrides(args)?;
    if init_tracing(&config.logging).is_err() {
        debug!("Tracing already initialized");
    }

    let board = open_board(&config.store)?;
    let report = report::run(board.as_ref(), &config, Utc::now())?;

    if let Some(ref out) = args.out {
        let document = report.to_json()?;
        std::fs::write(out, &document)
            .with_context(|| format!("Failed to write report to {}", out.display()))?;
    }

    if args.json {
        Ok(report.to_json()?)
    } else {
        Ok(format_report_pretty(&report))
    }
}
