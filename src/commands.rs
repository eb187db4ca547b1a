//! Command handlers bridging the CLI to the workflow controllers
//!
//! Each handler wires a controller to the API, runs one operation, renders
//! the resulting state, and reports success. Remote failures never
//! propagate out of a handler; they surface as rendered error messages and
//! a `false` return that becomes the process exit code.

use chrono::Local;
use std::path::PathBuf;

use crate::api::ScheduleApi;
use crate::cli::{Args, Command};
use crate::config::Config;
use crate::confirm::{ScriptedConfirm, StdinConfirm};
use crate::controllers::{AllocationConsole, ClearResult, RequestConsole, ReviewResult};
use crate::csv_template;
use crate::display;
use crate::error::AppError;
use crate::models::RequestStatus;

/// Handles the configuration-management flags (`--config`, `--set-league`,
/// `--set-log-file`, `--clear-log-file`). Loads the existing config when
/// present, applies the updates, and saves.
pub async fn handle_config_update(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_from_file(&crate::config::get_config_path())
        .await
        .unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_league_id) = &args.new_league_id {
        config.league_id = new_league_id.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Dispatches one subcommand. Returns whether the operation succeeded.
pub async fn handle_command(command: Command, config: &Config) -> Result<bool, AppError> {
    let api = ScheduleApi::new(config)?;
    match command {
        Command::Template { out } => handle_template(api, config, out).await,
        Command::Import { file } => handle_import(api, file).await,
        Command::List { scope, field } => handle_list(api, scope, field).await,
        Command::Clear {
            scope,
            field,
            from,
            to,
            confirm_phrase,
        } => handle_clear(api, scope, field, from, to, confirm_phrase).await,
        Command::Preview {
            division,
            field,
            from,
            to,
        } => handle_generate(api, division, field, from, to, false).await,
        Command::Apply {
            division,
            field,
            from,
            to,
        } => handle_generate(api, division, field, from, to, true).await,
        Command::Requests { status } => handle_requests(api, status).await,
        Command::Approve { id, yes } => handle_review(api, id, true, yes).await,
        Command::Reject { id, yes } => handle_review(api, id, false, yes).await,
    }
}

async fn handle_template(
    api: ScheduleApi,
    config: &Config,
    out: Option<PathBuf>,
) -> Result<bool, AppError> {
    let mut console = AllocationConsole::new(api);
    if !console.load_dependencies().await {
        if let Some(error) = &console.errors.load {
            display::print_error(error);
        }
        return Ok(false);
    }

    let document = csv_template::build_template_csv(&console.divisions, &console.fields);
    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    let path = csv_template::write_template(&dir, &config.league_id, &document).await?;
    display::print_success(&format!("Template written to {}", path.display()));
    Ok(true)
}

async fn handle_import(api: ScheduleApi, file: PathBuf) -> Result<bool, AppError> {
    let mut console = AllocationConsole::new(api);
    console.select_file(file);
    if console.import().await {
        if let Some(summary) = &console.last_import {
            display::render_import_summary(summary);
        }
        Ok(true)
    } else {
        if let Some(error) = &console.errors.import {
            display::print_error(error);
        }
        Ok(false)
    }
}

async fn handle_list(
    api: ScheduleApi,
    scope: Option<String>,
    field: Option<String>,
) -> Result<bool, AppError> {
    let mut console = AllocationConsole::new(api);
    console.scope_filter = scope.unwrap_or_default();
    console.field_filter = field.unwrap_or_default();

    if console.list().await {
        if let Some(info) = &console.info {
            display::print_info(info);
        }
        display::render_allocations(&console.allocations);
        Ok(true)
    } else {
        if let Some(error) = &console.errors.list {
            display::print_error(error);
        }
        Ok(false)
    }
}

async fn handle_clear(
    api: ScheduleApi,
    scope: String,
    field: Option<String>,
    from: Option<String>,
    to: Option<String>,
    confirm_phrase: Option<String>,
) -> Result<bool, AppError> {
    let mut console = AllocationConsole::new(api);
    console.scope_filter = scope;
    console.field_filter = field.unwrap_or_default();
    console.date_from = from.unwrap_or_default();
    console.date_to = to.unwrap_or_default();
    prepare_range(&mut console).await;

    let result = match confirm_phrase {
        Some(phrase) => console.clear(&ScriptedConfirm::with_phrase(phrase)).await,
        None => console.clear(&StdinConfirm).await,
    };

    match result {
        ClearResult::Cleared(deleted) => {
            display::print_success(&format!("Deleted {deleted} allocations"));
            display::render_allocations(&console.allocations);
            Ok(true)
        }
        ClearResult::Aborted => {
            // Intentional user-abort: nothing deleted, nothing to report
            Ok(true)
        }
        ClearResult::MissingScope | ClearResult::Failed | ClearResult::Busy => {
            if let Some(error) = &console.errors.clear {
                display::print_error(error);
            }
            Ok(false)
        }
    }
}

async fn handle_generate(
    api: ScheduleApi,
    division: String,
    field: Option<String>,
    from: Option<String>,
    to: Option<String>,
    apply: bool,
) -> Result<bool, AppError> {
    let mut console = AllocationConsole::new(api);
    console.generator_division = division;
    console.field_filter = field.unwrap_or_default();
    console.date_from = from.unwrap_or_default();
    console.date_to = to.unwrap_or_default();
    prepare_range(&mut console).await;

    if apply {
        if console.apply().await {
            if let Some(created) = console.last_apply_created {
                display::print_success(&format!("Created {created} slots"));
            }
            Ok(true)
        } else {
            if let Some(error) = &console.errors.apply {
                display::print_error(error);
            }
            Ok(false)
        }
    } else if console.preview().await {
        if let Some(preview) = &console.preview {
            display::render_preview(preview);
        }
        Ok(true)
    } else {
        if let Some(error) = &console.errors.preview {
            display::print_error(error);
        }
        Ok(false)
    }
}

/// Resolves the default date range from league season data, without
/// overwriting anything the user supplied. A failed league fetch falls
/// back to the fixed range.
async fn prepare_range(console: &mut AllocationConsole) {
    if console.date_from.is_empty() || console.date_to.is_empty() {
        console.load_dependencies().await;
        console.ensure_default_range(Local::now().date_naive());
    }
}

async fn handle_requests(api: ScheduleApi, status: Option<String>) -> Result<bool, AppError> {
    let filter = status
        .map(|s| s.parse::<RequestStatus>())
        .transpose()?;

    let mut console = RequestConsole::new(api);
    console.set_filter(filter);

    if console.list().await {
        display::render_requests(&console.requests, console.counts());
        Ok(true)
    } else {
        if let Some(error) = &console.last_error {
            display::print_error(error);
        }
        Ok(false)
    }
}

async fn handle_review(
    api: ScheduleApi,
    id: String,
    approve: bool,
    yes: bool,
) -> Result<bool, AppError> {
    let mut console = RequestConsole::new(api);
    if !console.list().await {
        if let Some(error) = &console.last_error {
            display::print_error(error);
        }
        return Ok(false);
    }

    let result = if yes {
        let confirmer = ScriptedConfirm::yes();
        if approve {
            console.approve(&id, &confirmer).await
        } else {
            console.reject(&id, &confirmer).await
        }
    } else {
        let confirmer = StdinConfirm;
        if approve {
            console.approve(&id, &confirmer).await
        } else {
            console.reject(&id, &confirmer).await
        }
    };

    match result {
        ReviewResult::Completed => {
            if let Some(info) = &console.info {
                display::print_success(info);
            }
            display::render_requests(&console.requests, console.counts());
            Ok(true)
        }
        ReviewResult::Declined => Ok(true),
        ReviewResult::NotFound
        | ReviewResult::NotReviewable
        | ReviewResult::Busy
        | ReviewResult::Failed => {
            if let Some(error) = &console.last_error {
                display::print_error(error);
            }
            Ok(false)
        }
    }
}
