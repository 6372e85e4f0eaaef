//! Race-history parser
//!
//! The race table has no row delimiter other than the date that opens every
//! row, so the section is cut into rows at date tokens and each row is read
//! left to right with a [`RowCursor`]: date, track, distance, surface, leader
//! times, race type, post and running positions, jockey and odds, field size,
//! then whatever is left is split into top finishers and a trip comment.
//!
//! A row is emitted as soon as its date is read. Every later step may miss
//! without affecting the others.

use crate::config::ExtractorConfig;
use crate::cursor::{RowCursor, Token};
use crate::times::{is_time_token, time_to_seconds};
use furlong_domain::{Calls, RaceLine};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DATE\s+TRK").expect("valid header regex"));

/// `DD` + month abbreviation + `YY`. No trailing word boundary, since the
/// track code is often glued on (`09Oct25Aqu`).
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{2}(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\d{2}")
        .expect("valid date regex")
});

static DATE_AT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\d{2}")
        .expect("valid date regex")
});

/// Workout lines start with a day and month but no year
static WORKOUT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\d{2}(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b")
        .expect("valid workout regex")
});

static GLUED_TRACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+").expect("valid track regex"));

static DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,2} \d{1,2}/\d{1,2}[fm]?|\d{1,2}(?:f|m(?:70|40)?)|\d{2,4}y)\b")
        .expect("valid distance regex")
});

static ODDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*?\d+\.\d{1,2}$").expect("valid odds regex"));

static CALL_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[A-Za-z]?$").expect("valid call regex"));

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("valid fraction regex"));

static TRIP_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:stumbled|stmbld|bumped|bmpd|checked|chckd|steadied|drifted|drift|blocked|rallied|bobbled|lugged|brushed|bid|dueled|tired|wide|off slow|outrun|faltered|angled|hustled|gamely|driving)\b",
    )
    .expect("valid trip keyword regex")
});

static LEADING_RESIDUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s./*-]+").expect("valid residue regex"));

static LOWERCASE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[a-z]").expect("valid lowercase regex"));

const SURFACE_CODES: &[&str] = &[
    "ft", "fst", "gd", "sy", "sly", "my", "sl", "wf", "fm", "yl", "sf", "hy", "fr", "tf", "aw",
];

/// Whether `token` is a track surface or condition code
pub fn is_surface_code(token: &str) -> bool {
    SURFACE_CODES.iter().any(|code| code.eq_ignore_ascii_case(token))
}

/// Parse the race table of one entrant span
///
/// Rows are returned in the order they appear in the span.
pub fn parse_race_history(span: &str, config: &ExtractorConfig) -> Vec<RaceLine> {
    let Some(section) = table_section(span) else {
        return Vec::new();
    };

    let starts: Vec<usize> = DATE.find_iter(section).map(|m| m.start()).collect();
    let mut lines = Vec::with_capacity(starts.len());

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(section.len());
        let row = section[start..end].trim_end();
        let line = parse_row(row, config);
        if line.is_bare() {
            warn!(row = %line.raw, "race line decomposed no further than its date");
        }
        lines.push(line);
    }

    debug!(rows = lines.len(), "parsed race history");
    lines
}

/// Offset of the race table: the column header, else the first date
pub(crate) fn table_start(span: &str) -> Option<usize> {
    HEADER.find(span).or_else(|| DATE.find(span)).map(|m| m.start())
}

/// From the table start to the first workout line after it
fn table_section(span: &str) -> Option<&str> {
    let start = table_start(span)?;

    let after = &span[start..];
    let end = WORKOUT_START
        .find_iter(after)
        .map(|m| m.start())
        .find(|&offset| offset > 0)
        .unwrap_or(after.len());

    Some(&after[..end])
}

fn parse_row(row: &str, config: &ExtractorConfig) -> RaceLine {
    let mut cursor = RowCursor::new(row);
    let date = cursor
        .take_match(&DATE_AT_START)
        .map(|t| t.text)
        .unwrap_or_default();
    let mut line = RaceLine::new(date, row);

    line.track = take_track(&mut cursor);

    cursor.skip_whitespace();
    line.distance_raw = cursor.take_match(&DISTANCE).map(|t| t.text.to_string());

    line.surface = cursor
        .take_token_if(is_surface_code)
        .map(|t| t.text.to_string());

    take_leader_times(&mut cursor, &mut line, config);
    take_race_type_and_calls(&mut cursor, &mut line, config);
    take_jockey_and_odds(&mut cursor, &mut line);
    take_field_size(&mut cursor, &mut line);

    let (finishers, comment) = split_remainder(cursor.rest(), config.max_top_finishers);
    line.top_finishers = finishers;
    line.comment = comment;
    line
}

/// Glued letters after the date, or a separate three-letter token
fn take_track(cursor: &mut RowCursor<'_>) -> Option<String> {
    if let Some(token) = cursor.take_match(&GLUED_TRACK) {
        return Some(token.text.to_string());
    }
    cursor.skip_whitespace();
    cursor
        .take_token_if(|t| t.len() == 3 && t.chars().all(|c| c.is_ascii_alphabetic()) && !is_surface_code(t))
        .map(|t| t.text.to_string())
}

/// Every consecutive time token is consumed. The last one is the finish;
/// the leading ones fill first, second and stretch, and any beyond the
/// configured slots are dropped.
fn take_leader_times(cursor: &mut RowCursor<'_>, line: &mut RaceLine, config: &ExtractorConfig) {
    let mut times: Vec<String> = Vec::new();
    while let Some(token) = cursor.take_token_if(is_time_token) {
        times.push(token.text.to_string());
    }

    let Some(finish) = times.pop() else {
        return;
    };
    times.truncate(config.max_leader_times.saturating_sub(1));

    let mut raw = Calls::default();
    let mut slots = times.into_iter();
    raw.first = slots.next();
    raw.second = slots.next();
    raw.stretch = slots.next();
    raw.finish = Some(finish);

    line.call_times_seconds = raw.map(|t| time_to_seconds(t));
    line.final_time_seconds = line.call_times_seconds.finish;
    line.call_times_raw = raw;
}

fn is_small_int(token: &str) -> bool {
    token.len() <= 2
        && token.bytes().all(|b| b.is_ascii_digit())
        && matches!(token.parse::<u8>(), Ok(1..=20))
}

fn is_odds(token: &str) -> bool {
    ODDS.is_match(token)
}

/// Text up to the post column is the race type; the post and the running
/// positions follow it.
fn take_race_type_and_calls(cursor: &mut RowCursor<'_>, line: &mut RaceLine, config: &ExtractorConfig) {
    let tokens = cursor.tokens();
    let post = tokens.iter().position(|t| is_small_int(t.text));
    let odds = tokens.iter().position(|t| is_odds(t.text));

    let type_end = match (post, odds) {
        (Some(p), Some(o)) if p < o => p,
        (Some(p), None) => p,
        (_, Some(o)) => {
            line.race_type = span_text(&tokens[..o.saturating_sub(1)]);
            return;
        }
        (None, None) => return,
    };

    line.race_type = span_text(&tokens[..type_end]);
    let post_token = &tokens[type_end];
    line.post_in_race = post_token.text.parse().ok();
    cursor.take_range(post_token.range.clone());

    let mut positions: Vec<f64> = Vec::new();
    while line.call_sequence.len() < config.max_call_positions {
        if let Some(frac) = cursor.take_token_if(|t| FRACTION.is_match(t)) {
            line.call_sequence.push(frac.text.to_string());
            positions.push(fraction_value(frac.text).unwrap_or(0.0));
            continue;
        }
        let Some(call) = cursor.take_token_if(|t| CALL_POSITION.is_match(t)) else {
            break;
        };
        let mut value = call_value(call.text);
        let mut text = call.text.to_string();
        if let Some(frac) = cursor.take_token_if(|t| FRACTION.is_match(t)) {
            value += fraction_value(frac.text).unwrap_or(0.0);
            text = format!("{} {}", text, frac.text);
        }
        line.call_sequence.push(text);
        positions.push(value);
    }

    let mut from_end = positions.into_iter().rev();
    line.position_at_call.finish = from_end.next();
    line.position_at_call.stretch = from_end.next();
    line.position_at_call.second = from_end.next();
    line.position_at_call.first = from_end.next();
}

fn span_text(tokens: &[Token<'_>]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    Some(tokens.iter().map(|t| t.text).collect::<Vec<_>>().join(" "))
}

fn call_value(token: &str) -> f64 {
    CALL_POSITION
        .captures(token)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .map_or(0.0, f64::from)
}

fn fraction_value(token: &str) -> Option<f64> {
    let caps = FRACTION.captures(token)?;
    let num: u8 = caps.get(1)?.as_str().parse().ok()?;
    let den: u8 = caps.get(2)?.as_str().parse().ok()?;
    (den > 0).then(|| f64::from(num) / f64::from(den))
}

/// Odds are the first decimal token left; the jockey is the word before it
fn take_jockey_and_odds(cursor: &mut RowCursor<'_>, line: &mut RaceLine) {
    let tokens = cursor.tokens();
    let Some(idx) = tokens.iter().position(|t| is_odds(t.text)) else {
        return;
    };

    if idx > 0 {
        let prev = &tokens[idx - 1];
        if prev.text.chars().any(|c| c.is_alphabetic()) {
            line.jockey = Some(prev.text.to_string());
        }
    }
    line.odds = Some(tokens[idx].text.to_string());
    cursor.take_range(tokens[idx].range.clone());
}

fn take_field_size(cursor: &mut RowCursor<'_>, line: &mut RaceLine) {
    let tokens = cursor.tokens();
    let Some(last) = tokens.last() else {
        return;
    };
    if tokens.len() > 1 && last.text.len() <= 2 && last.text.bytes().all(|b| b.is_ascii_digit()) {
        line.field_size = last.text.parse().ok();
        cursor.truncate_end(last.range.start);
    }
}

/// Split the end of a row into top finishers and a trip comment
///
/// Tried in order: a semicolon, the earliest trip keyword, a double space,
/// then a dash-separated list of names whose last entry ends at the first
/// lowercase word. Otherwise everything is comment.
///
/// Rows reaching this through `CardParser` are normalized and never hold a
/// double space, so that rule only fires on text parsed directly.
pub fn split_remainder(rest: &str, max_finishers: usize) -> (Vec<String>, Option<String>) {
    let rest = rest.trim();
    if rest.is_empty() {
        return (Vec::new(), None);
    }

    let (names, comment) = if let Some((names, comment)) = rest.split_once(';') {
        (names, comment)
    } else if let Some(m) = TRIP_KEYWORD.find(rest) {
        rest.split_at(m.start())
    } else if let Some(at) = rest.find("  ") {
        rest.split_at(at)
    } else if rest.contains('-') {
        let cut = rest
            .rfind('-')
            .and_then(|dash| LOWERCASE_WORD.find(&rest[dash..]).map(|m| dash + m.start()))
            .unwrap_or(rest.len());
        rest.split_at(cut)
    } else {
        ("", rest)
    };

    let names = LEADING_RESIDUE.replace(names.trim(), "");
    let finishers = names
        .split([',', '-'])
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .take(max_finishers)
        .map(str::to_string)
        .collect();

    let comment = comment.trim();
    let comment = (!comment.is_empty()).then(|| comment.to_string());
    (finishers, comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(span: &str) -> Vec<RaceLine> {
        parse_race_history(span, &ExtractorConfig::default())
    }

    #[test]
    fn test_glued_track_and_leader_times() {
        let lines = parse("09Oct25Aqu 6f ft 24 48 112 JonesT 3.50 2 Fast Rocket,Other Horse drifted out");
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.date_raw, "09Oct25");
        assert_eq!(line.track.as_deref(), Some("Aqu"));
        assert_eq!(line.distance_raw.as_deref(), Some("6f"));
        assert_eq!(line.surface.as_deref(), Some("ft"));
        assert_eq!(line.call_times_raw.first.as_deref(), Some("24"));
        assert_eq!(line.call_times_raw.second.as_deref(), Some("48"));
        assert_eq!(line.call_times_raw.stretch, None);
        assert_eq!(line.call_times_raw.finish.as_deref(), Some("112"));
        assert_eq!(line.final_time_seconds, Some(72.0));
        assert_eq!(line.jockey.as_deref(), Some("JonesT"));
        assert_eq!(line.odds.as_deref(), Some("3.50"));
        assert_eq!(line.race_type, None);
        assert_eq!(line.top_finishers, vec!["Fast Rocket", "Other Horse"]);
        assert_eq!(line.comment.as_deref(), Some("drifted out"));
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_full_row() {
        let row = "12Sep25 Sar 1 1/16m fm :23.1 :47.2 1:11.4 1:42.3 Alw 50000 4 2 3 1/2 2 1 1 1/2 SmithJ *1.20 Brave Heart-Quick Step-Lone Star gamely inside 9";
        let line = &parse(row)[0];
        assert_eq!(line.track.as_deref(), Some("Sar"));
        assert_eq!(line.distance_raw.as_deref(), Some("1 1/16m"));
        assert_eq!(line.surface.as_deref(), Some("fm"));
        assert_eq!(line.call_times_raw.first.as_deref(), Some(":23.1"));
        assert_eq!(line.call_times_raw.stretch.as_deref(), Some("1:11.4"));
        assert!((line.final_time_seconds.unwrap() - 102.3).abs() < 1e-9);
        assert_eq!(line.race_type.as_deref(), Some("Alw 50000"));
        assert_eq!(line.post_in_race, Some(4));
        assert_eq!(line.call_sequence, vec!["2", "3 1/2", "2", "1", "1 1/2"]);
        assert_eq!(line.position_at_call.finish, Some(1.5));
        assert_eq!(line.position_at_call.stretch, Some(1.0));
        assert_eq!(line.position_at_call.second, Some(2.0));
        assert_eq!(line.position_at_call.first, Some(3.5));
        assert_eq!(line.jockey.as_deref(), Some("SmithJ"));
        assert_eq!(line.odds.as_deref(), Some("*1.20"));
        assert_eq!(line.field_size, Some(9));
        assert_eq!(line.top_finishers, vec!["Brave Heart", "Quick Step", "Lone Star"]);
        assert_eq!(line.comment.as_deref(), Some("gamely inside"));
    }

    #[test]
    fn test_extra_fractions_never_shift_the_finish() {
        let row = "12Sep25 Sar 1 1/16m fm :23.1 :47.2 1:11.4 1:36.2 1:42.3 Alw 50000 4 2 3 2 1 1 SmithJ *1.20 Brave Heart; gamely";
        let line = &parse(row)[0];
        assert_eq!(line.call_times_raw.first.as_deref(), Some(":23.1"));
        assert_eq!(line.call_times_raw.second.as_deref(), Some(":47.2"));
        assert_eq!(line.call_times_raw.stretch.as_deref(), Some("1:11.4"));
        assert_eq!(line.call_times_raw.finish.as_deref(), Some("1:42.3"));
        assert!((line.final_time_seconds.unwrap() - 102.3).abs() < 1e-9);
        assert_eq!(line.race_type.as_deref(), Some("Alw 50000"));
        assert_eq!(line.post_in_race, Some(4));
    }

    #[test]
    fn test_single_leader_slot_keeps_only_finish() {
        let config = ExtractorConfig {
            max_leader_times: 1,
            ..ExtractorConfig::default()
        };
        let line = &parse_race_history("05Oct25Bel 7f ft :22 :45 1:22 A 1.00", &config)[0];
        assert_eq!(line.call_times_raw.first, None);
        assert_eq!(line.call_times_raw.finish.as_deref(), Some("1:22"));
        assert_eq!(line.final_time_seconds, Some(82.0));
    }

    #[test]
    fn test_rows_split_at_dates_in_order() {
        let span = "DATE TRK DIST\n05Oct25Bel 7f ft 1:22 A 1.00\n01Sep25Sar 6f my 1:10 B 2.00";
        let lines = parse(span);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].date_raw, "05Oct25");
        assert_eq!(lines[0].track.as_deref(), Some("Bel"));
        assert_eq!(lines[1].date_raw, "01Sep25");
        assert_eq!(lines[1].surface.as_deref(), Some("my"));
        assert_eq!(lines[1].odds.as_deref(), Some("2.00"));
    }

    #[test]
    fn test_table_ends_at_workouts() {
        let span = "05Oct25Bel 7f ft 1:22 A 1.00\n28Sep Bel 4f ft :48 B 5/20";
        let lines = parse(span);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].raw.contains("28Sep"));
    }

    #[test]
    fn test_irregular_row_still_emitted() {
        let lines = parse("prefix 03Aug25 ??? garbled");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].date_raw, "03Aug25");
        assert_eq!(lines[0].track, None);
        assert_eq!(lines[0].odds, None);
        assert_eq!(lines[0].comment.as_deref(), Some("??? garbled"));
    }

    #[test]
    fn test_out_of_range_time_is_not_a_leader_time() {
        let line = &parse("03Aug25Mth 6f ft :22 1:75.3 Clm 3 JoeJ 4.10")[0];
        assert_eq!(line.call_times_raw.finish.as_deref(), Some(":22"));
        assert_eq!(line.call_times_seconds.finish, Some(22.0));
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_no_dates_no_rows() {
        assert!(parse("Own: Somebody\nTrnr: Else").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_split_remainder_priorities() {
        let (names, comment) = split_remainder("Alpha, Beta; bumped start", 3);
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(comment.as_deref(), Some("bumped start"));

        let (names, comment) = split_remainder("Alpha Beta  no factor", 3);
        assert_eq!(names, vec!["Alpha Beta"]);
        assert_eq!(comment.as_deref(), Some("no factor"));

        let (names, comment) = split_remainder("No Names Here", 3);
        assert!(names.is_empty());
        assert_eq!(comment.as_deref(), Some("No Names Here"));

        let (names, _) = split_remainder("A-B-C-D", 3);
        assert_eq!(names, vec!["A", "B", "C"]);

        let (names, comment) = split_remainder("Alpha Star-Beta Moon-Gamma Ray gained late", 3);
        assert_eq!(names, vec!["Alpha Star", "Beta Moon", "Gamma Ray"]);
        assert_eq!(comment.as_deref(), Some("gained late"));
    }

    #[test]
    fn test_surface_codes() {
        assert!(is_surface_code("ft"));
        assert!(is_surface_code("FM"));
        assert!(!is_surface_code("Aqu"));
    }
}
