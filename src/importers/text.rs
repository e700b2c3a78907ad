// src/importers/text.rs
//
// Heuristic parser for one pasted credential block. The first line names
// the service, an optional second line names a sub-category, and the
// remaining lines are scanned for username/password signals in a fixed
// order. Whatever cannot be classified lands in the notes, so nothing
// from the paste is silently dropped.

use crate::generators::strength::estimate_strength;
use crate::models::{ParsedCredential, Strength};

use super::DEFAULT_CATEGORY;

/// Parse one free-form credential block.
///
/// Emits at most one record: a regular record when a username or password
/// was found, a notes-only fallback when only leftovers remain, nothing
/// when the input is empty.
pub fn parse_text(raw: &str) -> Vec<ParsedCredential> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    let name = strip_parenthetical(lines[0]);

    // An optional sub-category label on line 1. Anything with an '@' or
    // column structure is credential data, not a label.
    let (category, start) = if lines.len() > 1 && is_category_label(lines[1]) {
        (lines[1].to_string(), 2)
    } else {
        (DEFAULT_CATEGORY.to_string(), 1)
    };

    let body = &lines[start.min(lines.len())..];

    // First pass: explicit "username:" line, first column-structured
    // line, explicit "password:" line. First match wins per signal.
    let mut explicit_username = String::new();
    for line in body {
        if has_prefix_ci(line, "username:") {
            explicit_username = after_first_colon(line);
            break;
        }
    }

    let mut column_email = String::new();
    let mut column_password = String::new();
    for line in body {
        let parts = split_columns(line);
        if parts.len() >= 2 {
            if parts[0].contains('@') {
                column_email = parts[0].clone();
            }
            column_password = parts[1].clone();
            break;
        }
    }

    let mut explicit_password = String::new();
    for line in body {
        if has_prefix_ci(line, "password:") {
            explicit_password = after_first_colon(line);
            break;
        }
    }

    let mut username = if !explicit_username.is_empty() {
        explicit_username.clone()
    } else {
        column_email
    };
    let mut password = if !explicit_password.is_empty() {
        explicit_password
    } else {
        column_password
    };

    // Second pass: everything not consumed above becomes notes, with a
    // few lines still allowed to fill in a missing username or password.
    let mut notes: Vec<String> = Vec::new();
    for line in body {
        if has_prefix_ci(line, "username:") || has_prefix_ci(line, "password:") {
            continue;
        }

        let parts = split_columns(line);
        if parts.len() >= 2 {
            if !explicit_username.is_empty() && parts[0].contains('@') {
                notes.push(parts[0].clone());
            }
            if password.is_empty() {
                password = parts[1].clone();
            }
            for extra in parts.iter().skip(2) {
                notes.push(extra.clone());
            }
            continue;
        }

        if has_prefix_ci(line, "pin:") {
            notes.push(line.to_string());
            continue;
        }

        if has_prefix_ci(line, "questions:") {
            notes.push("Questions:".to_string());
            continue;
        }

        if line.contains('@') {
            if !explicit_username.is_empty() {
                notes.push(line.to_string());
            } else if username.is_empty() {
                username = line.to_string();
            } else {
                notes.push(line.to_string());
            }
            continue;
        }

        if password.is_empty() && !line.contains(':') && line.chars().count() > 3 {
            password = line.to_string();
            continue;
        }

        notes.push(line.to_string());
    }

    let mut credentials = Vec::new();

    if !username.is_empty() || !password.is_empty() {
        let estimate = estimate_strength(&password);
        credentials.push(ParsedCredential {
            name,
            username,
            password,
            category,
            strength: estimate.strength,
            favorite: false,
            notes: join_notes(notes),
        });
    } else if !notes.is_empty() {
        // Nothing extractable beyond free text: keep it all as notes.
        credentials.push(ParsedCredential {
            name,
            username: String::new(),
            password: String::new(),
            category,
            strength: Strength::Weak,
            favorite: false,
            notes: join_notes(notes),
        });
    }

    credentials
}

fn join_notes(notes: Vec<String>) -> Option<String> {
    if notes.is_empty() {
        None
    } else {
        Some(notes.join("\n"))
    }
}

/// Strip a parenthesized suffix from the service line, e.g.
/// `"Foo (old)"` becomes `"Foo"`.
fn strip_parenthetical(line: &str) -> String {
    if let (Some(open), Some(close)) = (line.find('('), line.rfind(')')) {
        if close > open {
            let mut name = String::with_capacity(line.len());
            name.push_str(&line[..open]);
            name.push_str(&line[close + 1..]);
            return name.trim().to_string();
        }
    }
    line.to_string()
}

/// A line qualifies as a sub-category label only if it carries no '@',
/// no tab, and no run of two or more whitespace characters.
fn is_category_label(line: &str) -> bool {
    !line.contains('@') && !line.contains('\t') && !has_multi_whitespace(line)
}

fn has_multi_whitespace(line: &str) -> bool {
    let mut run = 0usize;
    for ch in line.chars() {
        if ch.is_whitespace() {
            run += 1;
            if run >= 2 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn has_prefix_ci(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

fn after_first_colon(line: &str) -> String {
    line.splitn(2, ':')
        .nth(1)
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

/// Split a line into columns at tabs and at runs of two or more
/// whitespace characters. Single interior spaces stay inside a column.
fn split_columns(line: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut whitespace = String::new();

    for ch in line.chars() {
        if ch.is_whitespace() {
            whitespace.push(ch);
            continue;
        }
        if !whitespace.is_empty() {
            let is_separator =
                whitespace.contains('\t') || whitespace.chars().count() >= 2;
            if is_separator {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            } else {
                current.push_str(&whitespace);
            }
            whitespace.clear();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts.iter().map(|part| part.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_username_and_password_lines() {
        let raw = "Gmail\nUsername: user@gmail.com\nPassword: Secr3t!";
        let parsed = parse_text(raw);
        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        assert_eq!(record.name, "Gmail");
        assert_eq!(record.username, "user@gmail.com");
        assert_eq!(record.password, "Secr3t!");
        assert_eq!(record.category, DEFAULT_CATEGORY);
        assert_eq!(record.strength, estimate_strength("Secr3t!").strength);
        assert!(record.notes.is_none());
        assert!(!record.favorite);
    }

    #[test]
    fn tab_separated_line_with_sub_category() {
        let raw = "Acme\nKrisFlyer\nuser@acme.com\thunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        assert_eq!(record.name, "Acme");
        assert_eq!(record.category, "KrisFlyer");
        assert_eq!(record.username, "user@acme.com");
        assert_eq!(record.password, "hunter22");
    }

    #[test]
    fn multi_space_columns_work_like_tabs() {
        let raw = "Acme\nuser@acme.com    hunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "user@acme.com");
        assert_eq!(parsed[0].password, "hunter22");
        assert_eq!(parsed[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn parenthesized_suffix_is_stripped_from_service() {
        let raw = "Old Bank (legacy)\nUsername: bob@bank.com\nPassword: hunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].name, "Old Bank");
    }

    #[test]
    fn username_line_without_at_sign_is_treated_as_category() {
        // Line 1 has no '@', tab, or double space, so it qualifies as a
        // sub-category label even though it looks like a username line.
        let raw = "Vault\nUsername: bob\nPassword: hunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].category, "Username: bob");
        assert_eq!(parsed[0].username, "");
        assert_eq!(parsed[0].password, "hunter22");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_text("").is_empty());
        assert!(parse_text("\n\n   \n").is_empty());
    }

    #[test]
    fn service_only_yields_nothing() {
        // No username, no password, no notes to fall back on.
        assert!(parse_text("Gmail").is_empty());
    }

    #[test]
    fn bare_email_and_password_lines() {
        let raw = "Gmail\nuser@gmail.com\nhunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "user@gmail.com");
        assert_eq!(parsed[0].password, "hunter22");
    }

    #[test]
    fn pin_line_goes_to_notes_verbatim() {
        let raw = "Bank\nUsername: bob@bank.com\nPassword: hunter22\nPIN: 1234";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].notes.as_deref(), Some("PIN: 1234"));
    }

    #[test]
    fn questions_line_is_replaced_by_literal() {
        let raw = "Bank\nUsername: bob@bank.com\nPassword: pw1234\nQuestions: what was my first pet";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].notes.as_deref(), Some("Questions:"));
    }

    #[test]
    fn email_line_joins_notes_when_username_is_explicit() {
        let raw = "Gmail\nUsername: bob@gmail.com\nPassword: hunter22\nbackup@gmail.com";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "bob@gmail.com");
        assert_eq!(parsed[0].notes.as_deref(), Some("backup@gmail.com"));
    }

    #[test]
    fn second_email_line_joins_notes() {
        let raw = "Gmail\nfirst@gmail.com\nsecond@gmail.com\nhunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "first@gmail.com");
        assert_eq!(parsed[0].password, "hunter22");
        assert_eq!(parsed[0].notes.as_deref(), Some("second@gmail.com"));
    }

    #[test]
    fn column_email_joins_notes_when_username_is_explicit() {
        let raw = "Acme\nUsername: bob@acme.com\nuser@acme.com\thunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "bob@acme.com");
        assert_eq!(parsed[0].password, "hunter22");
        assert_eq!(parsed[0].notes.as_deref(), Some("user@acme.com"));
    }

    #[test]
    fn extra_columns_join_notes_individually() {
        let raw = "Acme\nuser@acme.com\thunter22\tmember since 2019";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].password, "hunter22");
        assert_eq!(parsed[0].notes.as_deref(), Some("member since 2019"));
    }

    #[test]
    fn short_or_colon_lines_become_notes_not_passwords() {
        let raw = "Site\nuser@site.com\nabc\nkey: value";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "user@site.com");
        assert_eq!(parsed[0].password, "");
        assert_eq!(parsed[0].notes.as_deref(), Some("abc\nkey: value"));
    }

    #[test]
    fn bare_long_line_is_taken_as_password() {
        let raw = "Wifi Router\nModel XR500\nSerial 0042";
        let parsed = parse_text(raw);
        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        // "Model XR500" qualifies as the sub-category label; the serial
        // line is long enough to be taken as a password.
        assert_eq!(record.category, "Model XR500");
        assert_eq!(record.password, "Serial 0042");
    }

    #[test]
    fn colon_lines_fall_back_to_notes_record() {
        let raw = "Router\nHome\nIP: 10.0.0.1\nfw: 7.1";
        let parsed = parse_text(raw);
        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        assert_eq!(record.category, "Home");
        assert_eq!(record.username, "");
        assert_eq!(record.password, "");
        assert_eq!(record.strength, Strength::Weak);
        assert_eq!(record.notes.as_deref(), Some("IP: 10.0.0.1\nfw: 7.1"));
    }

    #[test]
    fn line_with_at_sign_is_not_a_category_label() {
        let raw = "Gmail\nuser@gmail.com\nhunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].category, DEFAULT_CATEGORY);
        assert_eq!(parsed[0].username, "user@gmail.com");
    }

    #[test]
    fn explicit_labels_are_case_insensitive() {
        let raw = "Gmail\nUSERNAME: bob@gmail.com\npassword: hunter22";
        let parsed = parse_text(raw);
        assert_eq!(parsed[0].username, "bob@gmail.com");
        assert_eq!(parsed[0].password, "hunter22");
    }

    #[test]
    fn split_columns_keeps_single_spaces_inside_a_column() {
        assert_eq!(
            split_columns("member since 2019"),
            vec!["member since 2019"]
        );
        assert_eq!(split_columns("a\tb"), vec!["a", "b"]);
        assert_eq!(split_columns("a  b   c"), vec!["a", "b", "c"]);
        assert_eq!(split_columns("a \t b"), vec!["a", "b"]);
    }

    #[test]
    fn strip_parenthetical_handles_missing_parens() {
        assert_eq!(strip_parenthetical("Foo (old)"), "Foo");
        assert_eq!(strip_parenthetical("Foo"), "Foo");
        assert_eq!(strip_parenthetical("Foo (a) bar (b)"), "Foo");
        assert_eq!(strip_parenthetical("Foo (unclosed"), "Foo (unclosed");
    }
}
