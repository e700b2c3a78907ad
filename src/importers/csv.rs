// src/importers/csv.rs
use crate::generators::strength::estimate_strength;
use crate::models::ParsedCredential;

use super::DEFAULT_CATEGORY;

/// Parse CSV content with the column order service, username, password,
/// category, notes.
///
/// The first line is treated as a header and skipped; header-only or
/// empty input yields nothing. Rows with fewer than two fields or an
/// empty service are dropped, and any field past the fifth is ignored.
pub fn parse_csv(raw: &str) -> Vec<ParsedCredential> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() <= 1 {
        return Vec::new();
    }

    let mut credentials = Vec::new();

    for line in &lines[1..] {
        let fields = split_fields(line);
        if fields.len() < 2 {
            continue;
        }

        let service = fields[0].as_str();
        if service.is_empty() {
            continue;
        }

        let username = fields.get(1).cloned().unwrap_or_default();
        let password = fields.get(2).cloned().unwrap_or_default();
        let category = fields
            .get(3)
            .filter(|field| !field.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let notes = fields.get(4).filter(|field| !field.is_empty()).cloned();

        let estimate = estimate_strength(&password);

        credentials.push(ParsedCredential {
            name: service.to_string(),
            username,
            password,
            category,
            strength: estimate.strength,
            favorite: false,
            notes,
        });
    }

    credentials
}

/// Split one CSV line into fields, honoring double-quoted fields.
///
/// Quotes toggle an in-quotes state and are not emitted; a comma inside
/// quotes does not split. There is no escaped-quote support beyond the
/// toggle.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strength;

    const HEADER: &str = "Service,Username,Password,Category,Notes";

    #[test]
    fn parses_a_full_row() {
        let raw = format!("{HEADER}\nGmail,user@gmail.com,pw123,Personal,note");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        assert_eq!(record.name, "Gmail");
        assert_eq!(record.username, "user@gmail.com");
        assert_eq!(record.password, "pw123");
        assert_eq!(record.category, "Personal");
        assert_eq!(record.notes.as_deref(), Some("note"));
        assert!(!record.favorite);
    }

    #[test]
    fn header_only_yields_nothing() {
        assert!(parse_csv(HEADER).is_empty());
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn quoted_comma_does_not_split() {
        let raw = format!("{HEADER}\n\"Acme, Inc\",bob,s3cret,Work,\"a, b\"");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Acme, Inc");
        assert_eq!(parsed[0].notes.as_deref(), Some("a, b"));
    }

    #[test]
    fn short_rows_are_skipped() {
        let raw = format!("{HEADER}\nlonely\nGmail,user");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Gmail");
        assert_eq!(parsed[0].username, "user");
        assert_eq!(parsed[0].password, "");
    }

    #[test]
    fn empty_service_rows_are_skipped() {
        let raw = format!("{HEADER}\n,user,pw");
        assert!(parse_csv(&raw).is_empty());
    }

    #[test]
    fn missing_category_defaults_to_imported() {
        let raw = format!("{HEADER}\nGmail,user,pw123");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed[0].category, DEFAULT_CATEGORY);
        assert!(parsed[0].notes.is_none());
    }

    #[test]
    fn strength_is_computed_from_the_password() {
        let raw = format!("{HEADER}\nGmail,user,Abcdef12345!,Personal");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed[0].strength, Strength::Strong);

        let raw = format!("{HEADER}\nGmail,user,abc,Personal");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed[0].strength, Strength::Weak);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = format!("{HEADER}\nGmail,user,pw,Personal,note,extra,more");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].notes.as_deref(), Some("note"));
    }

    #[test]
    fn blank_lines_between_rows_are_ignored() {
        let raw = format!("{HEADER}\n\nGmail,user,pw\n   \nGitHub,dev,pw2");
        let parsed = parse_csv(&raw);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "GitHub");
    }

    #[test]
    fn split_fields_handles_quote_toggling() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields("\"a,b\",c"), vec!["a,b", "c"]);
        assert_eq!(split_fields(""), vec![""]);
        assert_eq!(split_fields("a,,c"), vec!["a", "", "c"]);
    }
}
