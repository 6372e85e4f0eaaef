//! Line-classified fields: workouts, notes, the morning line and silks

use super::identity::sex_age;
use super::labels::{OWNER, STOP};
use regex::Regex;
use std::sync::LazyLock;

/// Day and month with no year glued on
static WORKOUT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[A-Za-z]{3}\b").expect("valid workout date regex"));

static WORKOUT_SURFACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:ft|fm|gd|sf|yl|my|sy|sl|wf|hy|fr)\b").expect("valid workout surface regex")
});

static NARRATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)won last race|moves up in class|failed as favorite|beaten by weaker|blinkers off|blinkers on|finished 3rd in last race",
    )
    .expect("valid narrative regex")
});

const NOTE_MARKERS: &[char] = &['ñ', 'Ñ', '×', '•', '*', '¶', '-', '—', '+'];

static MORNING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}$").expect("valid morning line regex"));

/// Lines scanned for the morning line
const MORNING_LINE_WINDOW: usize = 10;

/// Non-empty lines scanned for a comma-separated colours line
const SILKS_WINDOW: usize = 5;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{3,}").expect("valid word regex"));

pub(crate) fn workouts(span: &str, max_len: usize) -> Vec<String> {
    span.lines()
        .map(str::trim)
        .filter(|l| l.len() < max_len && WORKOUT_DATE.is_match(l) && WORKOUT_SURFACE.is_match(l))
        .map(str::to_string)
        .collect()
}

pub(crate) fn notes(span: &str) -> Vec<String> {
    span.lines()
        .map(str::trim)
        .filter(|l| l.starts_with(NOTE_MARKERS) || NARRATIVE.is_match(l))
        .map(str::to_string)
        .collect()
}

/// First standalone `N/M` token above the race table
///
/// A fraction right after a bare integer is a length (`3 1/2`), not odds.
pub(crate) fn morning_line(span: &str, table_start: Option<usize>) -> Option<String> {
    let head = &span[..table_start.unwrap_or(span.len())];
    for line in head.lines().take(MORNING_LINE_WINDOW) {
        let mut prev: Option<&str> = None;
        for token in line.split_whitespace() {
            let after_integer = prev.is_some_and(|p| p.bytes().all(|b| b.is_ascii_digit()));
            if MORNING_LINE.is_match(token) && !after_integer {
                return Some(token.to_string());
            }
            prev = Some(token);
        }
    }
    None
}

/// Racing colours: a comma-separated line near the top of the span, else
/// the line right after the owner
pub(crate) fn silks(span: &str) -> Option<String> {
    let lines: Vec<&str> = span.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let near_top = lines
        .iter()
        .take(SILKS_WINDOW)
        .find(|l| l.contains(',') && l.len() > 8 && is_colours_line(l));
    if let Some(line) = near_top {
        return Some(line.to_string());
    }

    let owner = lines.iter().position(|l| OWNER.is_match(l))?;
    lines
        .get(owner + 1)
        .filter(|l| is_colours_line(l))
        .map(|l| l.to_string())
}

/// Mixed-case words with no label, number, note marker or sex/age code
fn is_colours_line(line: &str) -> bool {
    !line.starts_with(|c: char| c.is_ascii_digit())
        && !line.starts_with(NOTE_MARKERS)
        && !line.contains('%')
        && !STOP.is_match(line)
        && line.chars().any(char::is_lowercase)
        && WORD.is_match(line)
        && sex_age(line, 1).0.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workouts() {
        let span = "28Sep Bel 4f ft :48 B 5/20\n09Oct25Aqu 6f ft 1:11\n15Sep Sar tr.t 5f gd 1:01 B\nnot a workout";
        assert_eq!(
            workouts(span, 200),
            vec!["28Sep Bel 4f ft :48 B 5/20", "15Sep Sar tr.t 5f gd 1:01 B"]
        );
    }

    #[test]
    fn test_workout_length_limit() {
        assert!(workouts("28Sep Bel 4f ft :48 B 5/20", 10).is_empty());
    }

    #[test]
    fn test_notes_markers_and_phrases() {
        let span = "ñ Won last race\nplain\n× Beaten by weaker\nMoves up in class today\n* Blinkers on";
        assert_eq!(
            notes(span),
            vec!["ñ Won last race", "× Beaten by weaker", "Moves up in class today", "* Blinkers on"]
        );
    }

    #[test]
    fn test_notes_not_deduplicated() {
        assert_eq!(notes("• Same\n• Same").len(), 2);
    }

    #[test]
    fn test_morning_line() {
        let span = "3 Fast Rocket (E 4)\n5/2 Own: J Smith\n09Oct25Aqu 6f 1/2";
        assert_eq!(morning_line(span, span.find("09Oct25")).as_deref(), Some("5/2"));
    }

    #[test]
    fn test_morning_line_skips_lengths() {
        let span = "won by 3 1/2\n8/1";
        assert_eq!(morning_line(span, None).as_deref(), Some("8/1"));
    }

    #[test]
    fn test_morning_line_only_above_table() {
        let span = "3 Fast Rocket (E 4)\n09Oct25Aqu 6f ft 9/2";
        assert_eq!(morning_line(span, span.find("09Oct25")), None);
    }

    #[test]
    fn test_silks_comma_line_near_top() {
        let span = "3 Fast Rocket (E 4)\nOwn: J Smith\nORTIZ JOSE L (210 41-35-30 20%)\nRoyal Blue, White Sash, Blue Cap\nB. c. 3";
        assert_eq!(silks(span).as_deref(), Some("Royal Blue, White Sash, Blue Cap"));
    }

    #[test]
    fn test_silks_line_after_owner() {
        let span = "3 Fast Rocket (E 4)\nOwn: J Smith\nGreen Yellow Diamonds\nSAEZ LUIS";
        assert_eq!(silks(span).as_deref(), Some("Green Yellow Diamonds"));
    }

    #[test]
    fn test_silks_skips_other_lines() {
        assert_eq!(silks("3 Fast Rocket (E 4)\nOwn: J Smith\nSAEZ LUIS\nDk. B. g. 4 (Mar)"), None);
        assert_eq!(silks("3 Fast Rocket (E 4)\nOwn: J Smith\nB. f. 3\nSire: Somebody"), None);
        assert_eq!(silks("3 Fast Rocket (E 4) Own: J Smith\n09Oct25Aqu 6f ft 1:11"), None);
        assert_eq!(silks(""), None);
    }
}
