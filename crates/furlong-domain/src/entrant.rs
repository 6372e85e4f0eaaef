//! Entrant records - one per horse detected in a past-performance document

use crate::race_line::RaceLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Post position of an entrant
///
/// A document without any recognizable entry marker is still returned as a
/// single record; that record is `Unattributed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Post {
    /// Post read from the entry marker (1-20)
    Assigned(u8),
    /// Fallback record covering a document with no entry markers
    Unattributed,
}

impl Post {
    /// The numeric post, if any
    pub fn number(&self) -> Option<u8> {
        match self {
            Post::Assigned(n) => Some(*n),
            Post::Unattributed => None,
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Post::Assigned(n) => write!(f, "{}", n),
            Post::Unattributed => write!(f, "?"),
        }
    }
}

/// Jockey meet record, e.g. `21 3-2-1 14%`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JockeyRecord {
    /// Text inside the parentheses, trimmed
    pub raw: String,

    /// Mounts
    pub starts: u32,

    /// First-place finishes
    pub wins: u32,

    /// Second-place finishes
    pub places: u32,

    /// Third-place finishes
    pub shows: u32,

    /// Win percentage, when printed
    pub win_pct: Option<u8>,
}

impl JockeyRecord {
    /// Parse the inside of a record group
    ///
    /// Accepts `21 3-2-1 14%`, `21 3 - 2 - 1` and similar spacing variants.
    /// Returns `None` unless starts and all three placings are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use furlong_domain::JockeyRecord;
    ///
    /// let record = JockeyRecord::parse("21 3-2-1 14%").unwrap();
    /// assert_eq!(record.starts, 21);
    /// assert_eq!(record.win_pct, Some(14));
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (starts, rest) = raw.split_once(char::is_whitespace)?;
        let starts = starts.parse().ok()?;

        let rest = rest.trim();
        let (placings, win_pct) = match rest.rsplit_once(char::is_whitespace) {
            Some((head, tail)) if tail.ends_with('%') => {
                (head, tail.trim_end_matches('%').parse().ok())
            }
            _ => (rest, None),
        };

        let compact: String = placings.chars().filter(|c| !c.is_whitespace()).collect();
        let mut parts = compact.split('-').map(|p| p.parse::<u32>());
        let wins = parts.next()?.ok()?;
        let places = parts.next()?.ok()?;
        let shows = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            starts,
            wins,
            places,
            shows,
            win_pct,
        })
    }
}

/// People connected to the entrant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Connections {
    /// Owner, from the `Own:` label
    pub owner: Option<String>,

    /// Jockey display name
    pub jockey_name: Option<String>,

    /// Jockey meet record
    pub jockey_record: Option<JockeyRecord>,

    /// Trainer, from the `Trnr:` label
    pub trainer: Option<String>,

    /// Breeder, from the `Brdr:` label
    pub breeder: Option<String>,
}

/// Sex of a horse as printed in past performances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// `f` - female up to four years
    Filly,
    /// `m` - female five and older
    Mare,
    /// `c` - intact male up to four years
    Colt,
    /// `g` - gelded male
    Gelding,
    /// `h` - intact male five and older
    Horse,
    /// `r` - ridgling
    Ridgling,
}

impl Sex {
    /// Map the one-letter code used in the source documents
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'f' => Some(Sex::Filly),
            'm' => Some(Sex::Mare),
            'c' => Some(Sex::Colt),
            'g' => Some(Sex::Gelding),
            'h' => Some(Sex::Horse),
            'r' => Some(Sex::Ridgling),
            _ => None,
        }
    }

    /// The one-letter code
    pub fn code(&self) -> char {
        match self {
            Sex::Filly => 'f',
            Sex::Mare => 'm',
            Sex::Colt => 'c',
            Sex::Gelding => 'g',
            Sex::Horse => 'h',
            Sex::Ridgling => 'r',
        }
    }
}

/// Breeding and description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pedigree {
    /// Sex code
    pub sex: Option<Sex>,

    /// Age in years (1-20)
    pub age: Option<u8>,

    /// Sire, from the `Sire:` label
    pub sire: Option<String>,

    /// Dam, from the `Dam:` label
    pub dam: Option<String>,
}

/// Summary line for one calendar year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Year label as printed, e.g. `2025`
    pub year: String,

    /// Summary text following the label
    pub summary: String,
}

/// Lifetime and per-year starts summaries
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Text after the `Life:` label
    pub life: Option<String>,

    /// Year summaries in document order
    pub by_year: Vec<YearSummary>,
}

impl AggregateStats {
    /// Summary for a year label
    pub fn year(&self, year: &str) -> Option<&str> {
        self.by_year
            .iter()
            .find(|y| y.year == year)
            .map(|y| y.summary.as_str())
    }
}

/// Occurrences of one surface or distance record label, e.g. `Fst`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceRecord {
    /// Label as printed
    pub label: String,

    /// One entry per labelled line, joined with its continuation lines
    pub entries: Vec<String>,
}

/// Everything recovered for one entrant
///
/// Built once by a single parse pass and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrantRecord {
    /// Post position, unique within a document
    pub post: Post,

    /// Horse name
    pub name: Option<String>,

    /// Running-style annotation, e.g. `E 4`
    pub tag: Option<String>,

    /// Morning-line odds, e.g. `5/2`
    pub morning_line: Option<String>,

    /// Racing colours, e.g. `Royal Blue, White Sash, Blue Cap`
    pub silks: Option<String>,

    /// Owner, jockey, trainer, breeder
    pub connections: Connections,

    /// Sex, age, sire, dam
    pub pedigree: Pedigree,

    /// Prime power rating, e.g. `125.3 (4th)`
    pub prime_power: Option<String>,

    /// Life and per-year summaries
    pub aggregate_stats: AggregateStats,

    /// Narrative note lines in document order
    pub notes: Vec<String>,

    /// Workout lines in document order
    pub workouts: Vec<String>,

    /// Statistic lines (percentages, sire/dam stats) in document order
    pub stat_lines: Vec<String>,

    /// Surface and distance records grouped by label, labels in order of
    /// first appearance
    pub surface_records: Vec<SurfaceRecord>,

    /// Race history rows in source order (most recent first, typically)
    pub race_history: Vec<RaceLine>,

    /// The slice of the normalized text this record was built from
    pub raw_span: String,
}

impl EntrantRecord {
    /// A record with nothing extracted yet
    pub fn empty(post: Post, raw_span: impl Into<String>) -> Self {
        Self {
            post,
            name: None,
            tag: None,
            morning_line: None,
            silks: None,
            connections: Connections::default(),
            pedigree: Pedigree::default(),
            prime_power: None,
            aggregate_stats: AggregateStats::default(),
            notes: Vec::new(),
            workouts: Vec::new(),
            stat_lines: Vec::new(),
            surface_records: Vec::new(),
            race_history: Vec::new(),
            raw_span: raw_span.into(),
        }
    }

    /// Records printed under `label`
    pub fn surface_record(&self, label: &str) -> Option<&SurfaceRecord> {
        self.surface_records.iter().find(|r| r.label == label)
    }

    /// Whether this is the fallback record of a document without markers
    pub fn is_unattributed(&self) -> bool {
        self.post == Post::Unattributed
    }
}
