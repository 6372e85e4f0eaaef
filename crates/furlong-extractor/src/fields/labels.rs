//! Values that follow a printed label (`Own:`, `Sire:`, `Trnr:` ...)

use regex::Regex;
use std::sync::LazyLock;

/// Where a labelled value ends: the next label or a section marker
pub(crate) static STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Own(?:er)?|Sire|Dam|Brdr|Trnr)\s*:|Prime Power:|\bLife:|DATE\s+TRK")
        .expect("valid label stop regex")
});

pub(crate) static OWNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bOwn(?:er)?\s*:").expect("valid owner label regex"));

pub(crate) static SIRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSire\s*:").expect("valid sire label regex"));

pub(crate) static DAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDam\s*:").expect("valid dam label regex"));

pub(crate) static BREEDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bBrdr\s*:").expect("valid breeder label regex"));

pub(crate) static TRAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bTrnr\s*:").expect("valid trainer label regex"));

/// Text after the first match of `label`
///
/// The value stops at the end of its line, the next label or a double space.
/// A label that ends its line takes the next non-empty line instead.
///
/// `normalize` collapses whitespace runs, so the double-space stop only
/// applies to text that did not go through it.
pub(crate) fn value_after(span: &str, label: &Regex) -> Option<String> {
    let m = label.find(span)?;
    let after = &span[m.end()..];

    let (line, rest) = after.split_once('\n').unwrap_or((after, ""));
    if let Some(value) = cut_value(line) {
        return Some(value);
    }
    if STOP.find(line).is_some() {
        return None;
    }

    rest.lines()
        .find(|l| !l.trim().is_empty())
        .and_then(cut_value)
}

fn cut_value(line: &str) -> Option<String> {
    let mut end = line.len();
    if let Some(stop) = STOP.find(line) {
        end = end.min(stop.start());
    }
    if let Some(gap) = line.find("  ") {
        end = end.min(gap);
    }

    let value = line[..end].trim().trim_start_matches(':').trim();
    (!value.is_empty()).then(|| value.to_string())
}
