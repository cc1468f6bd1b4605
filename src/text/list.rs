//! Plain-text card lists.
//!
//! One name per line. A leading quantity such as `1 `, `2x ` or `4X ` is
//! stripped. Blank lines and `Header:` lines are structure, not names.

use once_cell::sync::Lazy;
use regex::Regex;

static QUANTITY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[xX]?\s+").expect("quantity prefix regex is valid"));

/// A header and the names listed under it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub names: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn new(header: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            header: header.into(),
            names,
        }
    }
}

/// Remove a leading quantity marker from a trimmed line.
#[must_use]
pub fn strip_quantity(line: &str) -> &str {
    match QUANTITY_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn header_of(line: &str) -> Option<&str> {
    line.strip_suffix(':').map(str::trim)
}

/// Names in a list, with headers and blank lines dropped.
///
/// ```
/// use rust_cube::text::parse_names;
///
/// let names = parse_names("All Commanders:\n1 Sol Ring\n\n4x Island\nKrenko, Mob Boss\n");
/// assert_eq!(names, ["Sol Ring", "Island", "Krenko, Mob Boss"]);
/// ```
#[must_use]
pub fn parse_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && header_of(line).is_none())
        .map(|line| strip_quantity(line).trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Names grouped under their `Header:` lines, in file order.
///
/// Names before the first header have no category and are dropped.
#[must_use]
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(header) = header_of(line) {
            sections.push(Section::new(header, Vec::new()));
            continue;
        }
        match sections.last_mut() {
            Some(section) => section.names.push(strip_quantity(line).trim().to_string()),
            None => log::debug!("ignoring uncategorized line {line:?}"),
        }
    }
    sections
}

/// The names under `header`, if that section exists.
#[must_use]
pub fn find_section<'a>(sections: &'a [Section], header: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.header == header)
}

/// Render sections as `Header:` blocks separated by blank lines.
#[must_use]
pub fn render_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&section.header);
        out.push_str(":\n");
        for name in &section.names {
            out.push_str(name);
            out.push('\n');
        }
    }
    out
}

/// Render a flat list, one name per line, with an optional header.
#[must_use]
pub fn render_list(header: Option<&str>, names: &[String]) -> String {
    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(header);
        out.push_str(":\n");
    }
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quantity() {
        assert_eq!(strip_quantity("1 Sol Ring"), "Sol Ring");
        assert_eq!(strip_quantity("12x Island"), "Island");
        assert_eq!(strip_quantity("3X Swamp"), "Swamp");
        assert_eq!(strip_quantity("Sol Ring"), "Sol Ring");
        assert_eq!(strip_quantity("Xenagos"), "Xenagos");
    }

    #[test]
    fn test_parse_names_skips_structure() {
        let text = "Player1:\nA\nB\n\nDraftVariant:\nC\n\nRound 2:\nD\n";
        assert_eq!(parse_names(text), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_parse_sections() {
        let text = "stray\nAzorius:\nHallowed Fountain\n1 Glacial Fortress\n\n\
                    Boros:\nSacred Foundry\n";
        let sections = parse_sections(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header, "Azorius");
        assert_eq!(sections[0].names, ["Hallowed Fountain", "Glacial Fortress"]);
        assert_eq!(find_section(&sections, "Boros").unwrap().names, ["Sacred Foundry"]);
        assert!(find_section(&sections, "Gruul").is_none());
    }

    #[test]
    fn test_render_sections_parses_back() {
        let sections = vec![
            Section::new("Lands", vec!["Command Tower".into()]),
            Section::new("Random Cards", vec!["Opt".into(), "Shock".into()]),
        ];
        let text = render_sections(&sections);
        assert_eq!(text, "Lands:\nCommand Tower\n\nRandom Cards:\nOpt\nShock\n");
        assert_eq!(parse_sections(&text), sections);
    }

    #[test]
    fn test_render_list() {
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(render_list(Some("Adjusted Card Pool"), &names), "Adjusted Card Pool:\nA\nB\n");
        assert_eq!(render_list(None, &names), "A\nB\n");
    }
}
