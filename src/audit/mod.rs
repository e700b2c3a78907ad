// src/audit/mod.rs
//
// Security report over a list of stored credential records: weak
// passwords, reuse across services, and passwords that have gone stale.

use std::collections::HashMap;

use chrono::{DateTime, Months, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::generators::strength::estimate_strength;
use crate::models::{Credential, Strength};

/// How long a password may go without an update before it counts as old.
const STALE_AFTER_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    WeakPassword,
    ReusedPassword,
    OldPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// One finding against a stored credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityIssue {
    pub credential_id: Uuid,
    pub kind: IssueKind,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// Full report: a 0-100 score plus the list of findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityReport {
    pub score: u8,
    pub total_credentials: usize,
    pub issues: Vec<SecurityIssue>,
}

/// Analyze stored credentials against a reference time.
///
/// Strength is recomputed from each password rather than trusting the
/// stored label. `now` is passed in so reports are reproducible; the CLI
/// supplies the wall clock.
pub fn analyze(credentials: &[Credential], now: DateTime<Utc>) -> SecurityReport {
    let mut issues = Vec::new();
    let stale_cutoff = now
        .checked_sub_months(Months::new(STALE_AFTER_MONTHS))
        .unwrap_or(now);

    // Group by password up front so reuse can be reported once per group.
    let mut by_password: HashMap<&str, Vec<&Credential>> = HashMap::new();
    for credential in credentials {
        by_password
            .entry(credential.password.as_str())
            .or_default()
            .push(credential);
    }

    for credential in credentials {
        if estimate_strength(&credential.password).strength == Strength::Weak {
            issues.push(SecurityIssue {
                credential_id: credential.id,
                kind: IssueKind::WeakPassword,
                severity: Severity::High,
                description: format!("Weak password detected for {}", credential.name),
                recommendation: "Use a stronger password with a mix of uppercase, \
                                 lowercase, numbers, and symbols."
                    .to_string(),
            });
        }

        if credential.last_updated < stale_cutoff {
            issues.push(SecurityIssue {
                credential_id: credential.id,
                kind: IssueKind::OldPassword,
                severity: Severity::Medium,
                description: format!(
                    "Password for {} hasn't been updated in over {} months",
                    credential.name, STALE_AFTER_MONTHS
                ),
                recommendation: "Regularly update your passwords every 3-6 months \
                                 for better security."
                    .to_string(),
            });
        }
    }

    // Reuse findings follow input order of the first affected credential.
    let mut reused: Vec<&Vec<&Credential>> = by_password
        .values()
        .filter(|group| group.len() > 1 && !group[0].password.is_empty())
        .collect();
    reused.sort_by_key(|group| {
        credentials
            .iter()
            .position(|c| c.id == group[0].id)
            .unwrap_or(usize::MAX)
    });

    for group in reused {
        let names: Vec<&str> = group.iter().map(|c| c.name.as_str()).collect();
        issues.push(SecurityIssue {
            credential_id: group[0].id,
            kind: IssueKind::ReusedPassword,
            severity: Severity::High,
            description: format!(
                "Password reused across multiple accounts: {}",
                names.join(", ")
            ),
            recommendation: "Use unique passwords for each account to prevent \
                             security breaches from affecting multiple accounts."
                .to_string(),
        });
    }

    SecurityReport {
        score: compute_score(credentials, &by_password, stale_cutoff),
        total_credentials: credentials.len(),
        issues,
    }
}

/// Weighted score: 40% strong passwords, 40% unique passwords, 20%
/// recently updated. An empty vault has nothing at risk and scores 100.
fn compute_score(
    credentials: &[Credential],
    by_password: &HashMap<&str, Vec<&Credential>>,
    stale_cutoff: DateTime<Utc>,
) -> u8 {
    let total = credentials.len();
    if total == 0 {
        return 100;
    }

    let strong = credentials
        .iter()
        .filter(|c| estimate_strength(&c.password).strength == Strength::Strong)
        .count();
    let unique = by_password.len();
    let recent = credentials
        .iter()
        .filter(|c| c.last_updated >= stale_cutoff)
        .count();

    let total = total as f64;
    let raw = (strong as f64 / total) * 40.0
        + (unique as f64 / total) * 40.0
        + (recent as f64 / total) * 20.0;

    raw.round().clamp(0.0, 100.0) as u8
}
