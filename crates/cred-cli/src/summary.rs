//! Terminal rendering for eligibility reports.

use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cred_model::{EligibilityResult, UNKNOWN, ValidationDetail};
use cred_validate::{INVALID_DATE, format_expiration};

/// Everything the check report needs beyond the eligibility result itself.
pub struct CheckOutcome {
    pub provider_name: Option<String>,
    pub npi: Option<String>,
    pub as_of: NaiveDate,
    pub result: EligibilityResult,
}

pub fn print_summary(outcome: &CheckOutcome) {
    println!(
        "Provider: {}",
        outcome.provider_name.as_deref().unwrap_or(UNKNOWN)
    );
    if let Some(npi) = &outcome.npi {
        println!("NPI: {npi}");
    }
    println!(
        "Provider type: {}",
        outcome.result.provider_type.as_deref().unwrap_or(UNKNOWN)
    );
    println!("Evaluated as of: {}", outcome.as_of);
    println!("{}", requirements_table(&outcome.result));
    if let Some(details) = details_table(&outcome.result) {
        println!();
        println!("Credentials considered:");
        println!("{details}");
    }
    if !outcome.result.validation_messages.is_empty() {
        println!();
        println!("Validation messages:");
        for message in &outcome.result.validation_messages {
            println!("- {message}");
        }
    }
    println!();
    println!("Eligibility: {}", verdict_label(&outcome.result));
}

/// Verdict line with the required-requirement tally.
pub fn verdict_label(result: &EligibilityResult) -> String {
    let total = result.required_count();
    let met = total - result.failed_required_count();
    let verdict = if result.is_eligible {
        "ELIGIBLE"
    } else {
        "NOT ELIGIBLE"
    };
    format!("{verdict} ({met}/{total} required requirements met)")
}

/// One row per evaluated requirement rule.
pub fn requirements_table(result: &EligibilityResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Requirement"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_requirements_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for requirement in &result.requirements {
        table.add_row(vec![
            Cell::new(&requirement.name),
            Cell::new(requirement.requirement_type.as_str()),
            required_cell(requirement.is_required),
            status_cell(requirement.is_valid),
            Cell::new(&requirement.validation_message),
        ]);
    }
    table
}

/// One row per considered credential, or None when no requirement carried
/// any detail rows.
pub fn details_table(result: &EligibilityResult) -> Option<Table> {
    let mut rows: Vec<(&str, &ValidationDetail)> = Vec::new();
    for requirement in &result.requirements {
        for detail in &requirement.details {
            rows.push((requirement.name.as_str(), detail));
        }
    }
    if rows.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Requirement"),
        header_cell("Type"),
        header_cell("Number"),
        header_cell("Status"),
        header_cell("Issuer"),
        header_cell("Expiration"),
        header_cell("Board actions"),
    ]);
    apply_details_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Right);
    for (name, detail) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&detail.license_type),
            Cell::new(&detail.number),
            detail_status_cell(&detail.status),
            Cell::new(&detail.issuer),
            expiration_cell(detail),
            board_action_cell(detail),
        ]);
    }
    Some(table)
}

/// Condensed style for plain listing tables.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_requirements_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(15)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn apply_details_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            // Wide enough for "No expiration date" plus cell padding.
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn required_cell(is_required: bool) -> Cell {
    if is_required {
        Cell::new("yes")
    } else {
        dim_cell("no")
    }
}

fn status_cell(is_valid: bool) -> Cell {
    if is_valid {
        Cell::new("Valid").fg(Color::Green)
    } else {
        Cell::new("Invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn detail_status_cell(status: &str) -> Cell {
    if status.eq_ignore_ascii_case("active") {
        Cell::new(status).fg(Color::Green)
    } else if status == UNKNOWN {
        dim_cell(status)
    } else {
        Cell::new(status).fg(Color::Yellow)
    }
}

fn expiration_cell(detail: &ValidationDetail) -> Cell {
    let rendered = format_expiration(detail.expiration_date.as_deref());
    if rendered == INVALID_DATE {
        Cell::new(rendered).fg(Color::Red)
    } else if detail.expiration_date.is_none() {
        dim_cell(rendered)
    } else {
        Cell::new(rendered)
    }
}

fn board_action_cell(detail: &ValidationDetail) -> Cell {
    if detail.has_board_action {
        Cell::new(detail.board_actions.len()).fg(Color::Yellow)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
