//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use furlong_domain::{EntrantRecord, EntryBoundary, RaceLine};
use furlong_extractor::ParsedCard;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a parsed card.
    pub fn format_card(&self, card: &ParsedCard, races: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(card)?),
            OutputFormat::Table => Ok(self.format_card_table(card, races)),
            OutputFormat::Quiet => Ok(format_records_quiet(&card.records)),
        }
    }

    /// Format entry boundaries.
    pub fn format_boundaries(&self, boundaries: &[EntryBoundary]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(boundaries)?),
            OutputFormat::Table => {
                if boundaries.is_empty() {
                    return Ok(self.warning("No entry markers found."));
                }
                let mut builder = Builder::default();
                builder.push_record(["Offset", "Post", "Name"]);
                for b in boundaries {
                    builder.push_record([
                        b.offset.to_string(),
                        b.candidate_post.to_string(),
                        b.candidate_name.clone(),
                    ]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(boundaries
                .iter()
                .map(|b| format!("{}\t{}", b.candidate_post, b.candidate_name))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_card_table(&self, card: &ParsedCard, races: bool) -> String {
        let mut out = Vec::new();
        if card.metadata.structural_miss {
            out.push(self.warning("No entry markers found; showing the whole document as one record."));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Post", "Name", "Tag", "ML", "Jockey", "Trainer", "Sex/Age", "Races", "Works",
        ]);
        for record in &card.records {
            builder.push_record([
                record.post.to_string(),
                text(&record.name),
                text(&record.tag),
                text(&record.morning_line),
                text(&record.connections.jockey_name),
                text(&record.connections.trainer),
                sex_age(record),
                record.race_history.len().to_string(),
                record.workouts.len().to_string(),
            ]);
        }
        out.push(styled(builder));

        if races {
            let rows: Vec<(&EntrantRecord, &RaceLine)> = card
                .records
                .iter()
                .flat_map(|r| r.race_history.iter().map(move |line| (r, line)))
                .collect();
            if rows.is_empty() {
                out.push(self.info("No race lines found."));
            } else {
                out.push(race_table(&rows));
            }
        }

        let summary = format!(
            "{} entrant(s), {} race line(s), {} bare",
            card.records.len(),
            card.metadata.race_lines,
            card.metadata.bare_race_lines
        );
        out.push(self.info(&summary));
        out.join("\n")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn race_table(rows: &[(&EntrantRecord, &RaceLine)]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Post", "Date", "Track", "Dist", "Surf", "Type", "Final", "Odds", "Jockey", "Finishers",
        "Comment",
    ]);
    for (record, line) in rows {
        builder.push_record([
            record.post.to_string(),
            line.date_raw.clone(),
            text(&line.track),
            text(&line.distance_raw),
            text(&line.surface),
            text(&line.race_type),
            line.final_time_seconds
                .map(|t| format!("{:.2}", t))
                .unwrap_or_else(|| "-".to_string()),
            text(&line.odds),
            text(&line.jockey),
            line.top_finishers.join(", "),
            text(&line.comment),
        ]);
    }
    styled(builder)
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn format_records_quiet(records: &[EntrantRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}\t{}", r.post, r.name.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn sex_age(record: &EntrantRecord) -> String {
    match (record.pedigree.sex, record.pedigree.age) {
        (Some(sex), Some(age)) => format!("{}{}", sex.code(), age),
        (Some(sex), None) => sex.code().to_string(),
        (None, Some(age)) => age.to_string(),
        (None, None) => "-".to_string(),
    }
}
