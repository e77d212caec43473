//! Subcommand implementations for the credentialing CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use cred_cli::logging::redact_value;
use cred_cli::summary::{CheckOutcome, apply_table_style};
use cred_ingest::ProviderPayload;
use cred_rules::RuleRegistry;
use cred_validate::{evaluate, evaluate_with_registry};

use crate::cli::{CheckArgs, TypesArgs};

/// Load a payload, evaluate it, and return the rendering inputs.
pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let registry = load_registry(args.rules.as_deref())?;
    let text = fs::read_to_string(&args.payload)
        .with_context(|| format!("read payload {}", args.payload.display()))?;
    let payload = ProviderPayload::from_json_str(&text)
        .with_context(|| format!("parse payload {}", args.payload.display()))?;
    let identity = payload.identity();

    let span = info_span!(
        "check",
        payload = %args.payload.display(),
        npi = %redact_value(identity.npi.as_deref().unwrap_or("-")),
    );
    let _guard = span.enter();
    debug!(
        license_count = payload.raw_licenses().len(),
        as_of = %as_of,
        "payload loaded"
    );

    let result = match args.provider_type.as_deref() {
        Some(label) => match registry.entry_for(label) {
            Some(entry) => evaluate(&payload, Some(&entry.name), &entry.rules, as_of),
            None => {
                warn!(provider_type = label, "provider type has no configured rules");
                evaluate(&payload, Some(label), &[], as_of)
            }
        },
        None => evaluate_with_registry(&payload, &registry, as_of),
    };
    info!(
        eligible = result.is_eligible,
        requirement_count = result.requirements.len(),
        failed_required = result.failed_required_count(),
        "evaluation complete"
    );

    Ok(CheckOutcome {
        provider_name: identity.provider_name,
        npi: identity.npi,
        as_of,
        result,
    })
}

/// Print the provider types a registry knows, one row per rule.
pub fn run_types(args: &TypesArgs) -> Result<()> {
    let registry = load_registry(args.rules.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Provider type", "Requirement", "Required"]);
    apply_table_style(&mut table);
    for entry in registry.provider_types() {
        for rule in &entry.rules {
            table.add_row(vec![
                entry.name.clone(),
                rule.base.name.clone(),
                if rule.is_required { "yes" } else { "no" }.to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

fn resolve_as_of(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .with_context(|| format!("parse --as-of date {value:?} (expected YYYY-MM-DD)")),
        None => Ok(Utc::now().date_naive()),
    }
}

fn load_registry(path: Option<&Path>) -> Result<RuleRegistry> {
    match path {
        Some(path) => {
            RuleRegistry::from_path(path).with_context(|| format!("load rules {}", path.display()))
        }
        None => Ok(RuleRegistry::builtin()),
    }
}
