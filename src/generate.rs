use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::{info, info_span};

use sunsets_ics::{build_calendar, validate_output_path, write_calendar};

use crate::cli::GenerateArgs;
use crate::config::SunsetsConfig;
use crate::convert;

/// Run one generation: resolve settings, build every event, write the file.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // Step 1: Settings (defaults < config file < CLI flags)
    let mut config = match args.config {
        Some(ref path) => SunsetsConfig::load(path)?,
        None => SunsetsConfig::default(),
    };
    convert::apply_overrides(&mut config, &args);
    let plan = convert::build_plan(&config, args.from, args.to, Local::now().year())?;

    // Step 2: Fail fast on an unusable destination
    validate_output_path(&plan.output).context("output path rejected")?;

    info!(
        location = plan.location.name(),
        latitude = plan.location.latitude(),
        longitude = plan.location.longitude(),
        timezone = plan.location.timezone_name(),
        range = %plan.range,
        horizon = plan.horizon.as_str(),
        algorithm = plan.algorithm.as_str(),
        "generating sunset events"
    );

    // Step 3: One event per date; any failure aborts before writing
    let resolver = plan.algorithm.resolver(plan.horizon);
    let calendar = build_calendar(&plan.location, &plan.range, resolver.as_ref())?;

    // Step 4: Serialize
    write_calendar(&plan.output, &calendar)
        .with_context(|| format!("failed to write calendar: {}", plan.output.display()))?;

    println!(
        "Wrote {} events for {} to {}",
        calendar.len(),
        plan.range,
        plan.output.display()
    );
    Ok(())
}
