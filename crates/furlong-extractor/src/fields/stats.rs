//! Aggregate statistics: lifetime and per-year summaries, Prime Power, stat
//! lines and surface records

use furlong_domain::{AggregateStats, SurfaceRecord, YearSummary};
use regex::Regex;
use std::sync::LazyLock;

static LIFE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bLife:\s*(\d+[ \t]+\d+[ \t]*-[ \t]*\d+[ \t]*-[ \t]*\d+(?:[ \t]+\$[\d,]+)?(?:[ \t]+\d{1,3}\b)?)",
    )
    .expect("valid life regex")
});

static YEAR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}\b").expect("valid year line regex"));

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[ \t])((?:19|20)\d{2})\b").expect("valid year regex"));

static YEAR_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bLife:|Prime Power:|DATE\s+TRK|\b(?:Fst|Off|Dis|Dist|Trf|AW|Wet)\b")
        .expect("valid year stop regex")
});

static PRIME_POWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Prime Power:\s*(\d[0-9.]*(?:\s*\([^)\n]*\))?)").expect("valid prime power regex")
});

static STAT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Sire Stats|Dam'sSire|SoldAt|StudFee|JKYw|Trn L60|Blnkr|Graded Stakes|Wnr last race")
        .expect("valid stat label regex")
});

static SURFACE_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Fst|Off|Dis|Dist|Trf|AW|Wet)(?:\s*\(\d+\))?(?:\s+\d|\s*$)")
        .expect("valid surface record regex")
});

/// A dated row: race line or workout
static DATED_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[A-Za-z]{3}").expect("valid dated row regex"));

/// Lines after a record label that may continue it
const SURFACE_DETAIL_LINES: usize = 3;

pub(crate) fn aggregate_stats(span: &str) -> AggregateStats {
    let life = LIFE
        .captures(span)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());

    let mut by_year: Vec<YearSummary> = Vec::new();
    for line in span.lines().map(str::trim).filter(|l| YEAR_LINE.is_match(l)) {
        for summary in year_segments(line) {
            if !by_year.iter().any(|y| y.year == summary.year) {
                by_year.push(summary);
            }
        }
    }

    AggregateStats { life, by_year }
}

/// A year line may hold several `YYYY summary` blocks side by side
fn year_segments(line: &str) -> Vec<YearSummary> {
    let marks: Vec<(usize, usize, &str)> = YEAR_TOKEN
        .captures_iter(line)
        .filter_map(|c| c.get(1))
        .map(|m| (m.start(), m.end(), m.as_str()))
        .collect();

    marks
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, end, year))| {
            let next = marks.get(i + 1).map_or(line.len(), |m| m.0);
            let text = &line[end..next];
            let text = YEAR_STOP.find(text).map_or(text, |stop| &text[..stop.start()]);
            let summary = text.trim();
            (!summary.is_empty()).then(|| YearSummary {
                year: year.to_string(),
                summary: summary.to_string(),
            })
        })
        .collect()
}

pub(crate) fn prime_power(span: &str) -> Option<String> {
    PRIME_POWER
        .captures(span)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

pub(crate) fn stat_lines(span: &str) -> Vec<String> {
    span.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && (l.contains('%') || STAT_LABEL.is_match(l)))
        .map(str::to_string)
        .collect()
}

/// Surface and distance records grouped by label
///
/// A labelled line takes up to three following lines with it, stopping at a
/// blank line, the next record, a dated row or a labelled field.
pub(crate) fn surface_records(span: &str) -> Vec<SurfaceRecord> {
    let lines: Vec<&str> = span.lines().map(str::trim).collect();
    let mut records: Vec<SurfaceRecord> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(label) = SURFACE_RECORD.captures(line).and_then(|c| c.get(1)) else {
            continue;
        };

        let mut parts = vec![*line];
        parts.extend(
            lines[idx + 1..]
                .iter()
                .take(SURFACE_DETAIL_LINES)
                .take_while(|l| continues_record(l)),
        );
        let entry = parts.join(" ");

        match records.iter_mut().find(|r| r.label == label.as_str()) {
            Some(record) => record.entries.push(entry),
            None => records.push(SurfaceRecord {
                label: label.as_str().to_string(),
                entries: vec![entry],
            }),
        }
    }
    records
}

fn continues_record(line: &str) -> bool {
    !line.is_empty()
        && !line.contains(':')
        && !SURFACE_RECORD.is_match(line)
        && !DATED_ROW.is_match(line)
        && !YEAR_LINE.is_match(line)
}
