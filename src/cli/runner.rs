use tracing::info;
use tracing_subscriber::EnvFilter;

use surah_rename::{FileOutcome, RenameParams, RenameReport, rename_pass, rename_pass_with};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn validate_extension(extension: &str) -> Result<String, AppError> {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(AppError::InvalidExtension {
            extension: extension.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn params_from_args(args: &CliArgs) -> Result<RenameParams, AppError> {
    Ok(RenameParams {
        mode: args.mode,
        extension: validate_extension(&args.extension)?,
        on_conflict: args.on_conflict,
        dry_run: args.dry_run,
    })
}

/// Operator-facing line for one outcome
fn outcome_line(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Renamed { from, to, dry_run } => {
            let verb = if *dry_run { "Would rename" } else { "Renamed" };
            format!("{}: {} → {}", verb, from.display(), to.display())
        }
        FileOutcome::Skipped { path, reason } => {
            format!("Skipped: {} ({})", path.display(), reason)
        }
        FileOutcome::Failed { path, error } => {
            format!("Error renaming {}: {}", path.display(), error)
        }
    }
}

fn summary_line(report: &RenameReport) -> String {
    format!("Total files processed: {}", report.examined)
}

fn print_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Failed { .. } => eprintln!("{}", outcome_line(outcome)),
        _ => println!("{}", outcome_line(outcome)),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = params_from_args(&args)?;
    info!("Source: {:?}", args.source);

    let report = if args.json {
        let report = rename_pass(&args.source, &params).map_err(AppError::from)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(AppError::from)?
        );
        report
    } else {
        let report =
            rename_pass_with(&args.source, &params, print_outcome).map_err(AppError::from)?;
        println!("\n{}", summary_line(&report));
        report
    };

    if report.errors > 0 {
        return Err(AppError::FailedRenames {
            failed: report.errors,
            examined: report.examined,
        }
        .into());
    }

    Ok(())
}
