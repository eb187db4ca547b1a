//! Terminal rendering of controller state
//!
//! Thin presentational layer: styled one-line messages plus simple aligned
//! tables. Long server-reported lists (import row errors, generation
//! conflicts) are capped with an overflow indicator.

use crossterm::style::Stylize;

use crate::constants::display as caps;
use crate::controllers::RequestCounts;
use crate::models::{Allocation, ImportSummary, PracticeRequest, SlotPreview};

pub fn print_heading(text: &str) {
    println!("{}", text.bold().cyan());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red());
}

pub fn print_info(text: &str) {
    println!("{}", text.yellow());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

/// Trailing note for a list rendered under a display cap.
fn overflow_note(total: usize, limit: usize) -> Option<String> {
    (total > limit).then(|| format!("... and {} more", total - limit))
}

pub fn render_allocations(allocations: &[Allocation]) {
    print_heading(&format!("{} allocations", allocations.len()));
    for allocation in allocations {
        let days = allocation.days_of_week.join("/");
        let active = if allocation.is_active { "" } else { " [inactive]" };
        println!(
            "  {:<10} {:<16} {} .. {}  {} {}-{}{}",
            allocation.scope.to_string(),
            allocation.field_key,
            allocation.starts_on,
            allocation.ends_on,
            days,
            allocation.start_time_local,
            allocation.end_time_local,
            active
        );
        if let Some(notes) = &allocation.notes {
            println!("      {}", notes.as_str().dark_grey());
        }
    }
}

/// Import results: counts always, row errors capped at 50.
pub fn render_import_summary(summary: &ImportSummary) {
    print_success(&format!(
        "Import complete: {} upserted, {} rejected, {} skipped",
        summary.upserted, summary.rejected, summary.skipped
    ));
    if summary.errors.is_empty() {
        return;
    }
    print_error(&format!("{} row errors:", summary.errors.len()));
    for error in summary.errors.iter().take(caps::IMPORT_ERROR_LIMIT) {
        println!("  {}", error.as_str().red());
    }
    if let Some(note) = overflow_note(summary.errors.len(), caps::IMPORT_ERROR_LIMIT) {
        print_info(&note);
    }
}

/// Preview results: slot count plus conflicts capped at 20.
pub fn render_preview(preview: &SlotPreview) {
    print_heading(&format!(
        "Preview: {} slots would be generated, {} conflicts",
        preview.slots.len(),
        preview.conflicts.len()
    ));
    for conflict in preview.conflicts.iter().take(caps::CONFLICT_LIMIT) {
        println!(
            "  {} {} {}-{} {} ({})",
            "conflict:".red(),
            conflict.game_date,
            conflict.start_time,
            conflict.end_time,
            conflict.field_key,
            conflict.division
        );
    }
    if let Some(note) = overflow_note(preview.conflicts.len(), caps::CONFLICT_LIMIT) {
        print_info(&note);
    }
}

pub fn render_requests(requests: &[PracticeRequest], counts: RequestCounts) {
    print_heading(&format!(
        "Practice requests: {} pending / {} approved / {} rejected ({} total)",
        counts.pending, counts.approved, counts.rejected, counts.total
    ));
    for request in requests {
        let field = request
            .slot
            .display_name
            .as_deref()
            .unwrap_or(&request.slot.field_key);
        println!(
            "  {:<8} {:<9} {:<10} team {:<10} {} {}-{} @ {}",
            request.request_id,
            request.status.to_string(),
            request.division,
            request.team_id,
            request.slot.game_date,
            request.slot.start_time,
            request.slot.end_time,
            field
        );
        if !request.reason.is_empty() {
            println!("      {}", request.reason.as_str().dark_grey());
        }
    }
}
