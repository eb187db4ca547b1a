use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging for the console.
///
/// Logs always go to a daily rolling file under the platform log directory
/// (or a custom path from `--log-file` / config). With `--verbose` a second
/// layer echoes to stdout for debugging a session.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Config may carry a custom log path; config load failures here are not
    // fatal, the default location applies
    let config_log_path = Config::load_from_file(&crate::config::get_config_path())
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("fieldtime_admin.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (
            crate::config::get_log_dir_path(),
            "fieldtime_admin.log".to_string(),
        ),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    // New log file each day
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = "fieldtime_admin=info"
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Bad log directive: {e}")))?;

    let registry = tracing_subscriber::registry();
    if args.verbose {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(EnvFilter::from_default_env().add_directive(
                        "fieldtime_admin=debug".parse().map_err(|e| {
                            AppError::log_setup_error(format!("Bad log directive: {e}"))
                        })?,
                    )),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(EnvFilter::from_default_env().add_directive(directive)),
            )
            .init();
    } else {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(EnvFilter::from_default_env().add_directive(directive)),
            )
            .init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
