//! Who the entrant is: header name and tag, jockey, sex and age

use furlong_domain::{JockeyRecord, Sex};
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:20|1[0-9]|[1-9])\s{1,3}([A-Za-z][A-Za-z0-9'’./\- ]*?)\s*\(")
        .expect("valid header regex")
});

static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\(([^)\n]*)\)").expect("valid group regex"));

static STYLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:E/P|E|P|S|NA)(?:\s+\d)?$").expect("valid style regex"));

static COUNTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}$").expect("valid country regex"));

static JOCKEY_WITH_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Z.'\- ]{1,50}?)\s*\((\d+\s+\d+\s*-\s*\d+\s*-\s*\d+(?:\s+\d+%)?)\)")
        .expect("valid jockey regex")
});

static ALL_CAPS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z.'\- ]{2,40}$").expect("valid caps line regex"));

static SEX_AGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)([fmcghr])\.(\s*)(\d{1,2})\b").expect("valid sex/age regex")
});

/// Name and running-style tag read from the entry marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Horse name, with any country suffix such as `(IRE)`
    pub name: Option<String>,
    /// Running-style tag, e.g. `E 4`
    pub tag: Option<String>,
}

pub(crate) fn header(span: &str) -> Header {
    let Some(caps) = HEADER.captures(span) else {
        return Header::default();
    };
    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return Header::default();
    };

    // The marker match stops just past the first `(`
    let mut rest = &span[whole.end() - 1..];
    let mut groups = Vec::new();
    while let Some(group) = PAREN_GROUP.captures(rest) {
        let (Some(all), Some(inner)) = (group.get(0), group.get(1)) else {
            break;
        };
        groups.push(inner.as_str().trim());
        rest = &rest[all.end()..];
    }

    let mut name = name.as_str().trim().to_string();
    for country in groups.iter().filter(|g| COUNTRY.is_match(g) && !STYLE_TAG.is_match(g)) {
        name = format!("{} ({})", name, country);
    }

    let tag = groups
        .iter()
        .find(|g| STYLE_TAG.is_match(g))
        .or_else(|| groups.iter().find(|g| !g.is_empty() && !COUNTRY.is_match(g)))
        .map(|g| g.to_string());

    Header {
        name: (!name.is_empty()).then_some(name),
        tag,
    }
}

/// Jockey name and, when printed, the parenthesized record
///
/// The name must open its line. A record group trailing some other line,
/// such as the trainer's, never names the jockey.
pub(crate) fn jockey(span: &str, fallback_lines: usize) -> (Option<String>, Option<JockeyRecord>) {
    for caps in JOCKEY_WITH_RECORD.captures_iter(span) {
        let (Some(name), Some(record)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let name = name.as_str().trim();
        if name.is_empty() {
            continue;
        }
        if let Some(record) = JockeyRecord::parse(record.as_str()) {
            return (Some(name.to_string()), Some(record));
        }
    }

    let fallback = span
        .lines()
        .take(fallback_lines)
        .map(str::trim)
        .find(|line| ALL_CAPS_LINE.is_match(line) && !line.starts_with("DATE"))
        .map(str::to_string);
    (fallback, None)
}

/// Sex code and age, allowed to sit up to `max_lines` lines apart
pub(crate) fn sex_age(span: &str, max_lines: usize) -> (Option<Sex>, Option<u8>) {
    for caps in SEX_AGE.captures_iter(span) {
        let (Some(code), Some(gap), Some(age)) = (caps.get(1), caps.get(2), caps.get(3)) else {
            continue;
        };
        if gap.as_str().matches('\n').count() >= max_lines {
            continue;
        }
        let Ok(age) = age.as_str().parse::<u8>() else {
            continue;
        };
        if !(1..=20).contains(&age) {
            continue;
        }
        let sex = code.as_str().chars().next().and_then(Sex::from_code);
        if sex.is_some() {
            return (sex, Some(age));
        }
    }
    (None, None)
}
