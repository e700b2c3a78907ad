// src/cli/handlers.rs
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use console::style;
use serde_json::json;

use crate::audit::{self, Severity};
use crate::core::Config;
use crate::generators::strength::MAX_SCORE;
use crate::generators::{estimate_strength, generate_password};
use crate::importers::{self, ImportFormat};
use crate::models::{Credential, Strength};
use crate::utils::{format_time_ago, truncate_string};

// Handlers for CLI commands
pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut options = config.generation_options();
    if let Some(length) = length {
        options.length = length;
    }
    if no_uppercase {
        options.include_uppercase = false;
    }
    if no_lowercase {
        options.include_lowercase = false;
    }
    if no_numbers {
        options.include_numbers = false;
    }
    if no_symbols {
        options.include_symbols = false;
    }

    let password = generate_password(&options);
    let estimate = estimate_strength(&password);
    log::debug!("generated a {}-character password", options.length);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "password": password,
                "score": estimate.score,
                "strength": estimate.strength,
            }))?
        );
    } else {
        println!("{}", style(&password).bold());
        println!(
            "strength: {} ({}/{})",
            styled_strength(estimate.strength),
            estimate.score,
            MAX_SCORE
        );
    }

    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> anyhow::Result<()> {
    let estimate = estimate_strength(password);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "score": estimate.score,
                "strength": estimate.strength,
                "percent": estimate.percent(),
            }))?
        );
    } else {
        println!(
            "strength: {} ({}/{}, {}%)",
            styled_strength(estimate.strength),
            estimate.score,
            MAX_SCORE,
            estimate.percent()
        );
    }

    Ok(())
}

pub fn handle_import(path: &Path, format: Option<&str>, json: bool) -> anyhow::Result<()> {
    let parsed = match format {
        Some(name) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let format = if name == "csv" {
                ImportFormat::Csv
            } else {
                ImportFormat::Text
            };
            importers::parse(&raw, format)
        }
        None => importers::parse_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };

    if parsed.is_empty() {
        bail!(
            "no credentials found in {}, check the format",
            path.display()
        );
    }

    log::info!(
        "parsed {} credential(s) from {}",
        parsed.len(),
        path.display()
    );

    let now = Utc::now();
    let records: Vec<Credential> = parsed
        .into_iter()
        .map(|candidate| Credential::from_parsed(candidate, now))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!(
            "{}",
            style(format!("Imported {} credential(s)", records.len())).green()
        );
        for record in &records {
            println!(
                "  {} [{}] {} ({})",
                style(&record.name).bold(),
                record.category,
                record.username,
                styled_strength(record.strength)
            );
        }
    }

    Ok(())
}

pub fn handle_audit(path: &Path, json: bool) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let credentials: Vec<Credential> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a credential export", path.display()))?;

    let now = Utc::now();
    let report = audit::analyze(&credentials, now);
    log::info!(
        "audited {} credential(s): score {}, {} issue(s)",
        report.total_credentials,
        report.score,
        report.issues.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let score = if report.score >= 80 {
        style(report.score).green()
    } else if report.score >= 50 {
        style(report.score).yellow()
    } else {
        style(report.score).red()
    };
    println!("Security score: {}/100", score);
    println!(
        "{} credential(s), {} issue(s)",
        report.total_credentials,
        report.issues.len()
    );

    if !credentials.is_empty() {
        println!();
        for credential in &credentials {
            println!(
                "  {} [{}] updated {}",
                style(&credential.name).bold(),
                credential.category,
                format_time_ago(credential.last_updated, now)
            );
        }
    }

    if !report.issues.is_empty() {
        println!();
        for issue in &report.issues {
            println!(
                "  [{}] {}",
                styled_severity(issue.severity),
                issue.description
            );
            println!(
                "         {}",
                style(truncate_string(&issue.recommendation, 100)).dim()
            );
        }
    }

    Ok(())
}

fn styled_strength(strength: Strength) -> console::StyledObject<&'static str> {
    match strength {
        Strength::Strong => style("strong").green(),
        Strength::Medium => style("medium").yellow(),
        Strength::Weak => style("weak").red(),
    }
}

fn styled_severity(severity: Severity) -> console::StyledObject<&'static str> {
    match severity {
        Severity::High => style("high").red(),
        Severity::Medium => style("medium").yellow(),
        Severity::Low => style("low").blue(),
    }
}
