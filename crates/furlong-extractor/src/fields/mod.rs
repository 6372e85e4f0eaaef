//! Field extractor set
//!
//! Every extractor reads the same entrant span on its own. None of them looks
//! at another's result, so a missing owner never stops the jockey, the race
//! history or anything else from being read. A miss is `None` or an empty
//! list; nothing is filled in with a guess.

mod identity;
mod labels;
mod lines;
mod stats;

pub use identity::Header;

use crate::config::ExtractorConfig;
use crate::history::{parse_race_history, table_start};
use furlong_domain::{
    AggregateStats, Connections, EntrantRecord, JockeyRecord, Pedigree, Post, RaceLine, Sex,
    SurfaceRecord,
};

/// Runs the per-field extractors over an entrant span
#[derive(Debug, Clone)]
pub struct FieldExtractors {
    config: ExtractorConfig,
}

impl FieldExtractors {
    /// Create an extractor set using the given limits
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Horse name and running-style tag from the entry marker
    pub fn header(&self, span: &str) -> Header {
        identity::header(span)
    }

    /// Text after `Own:`
    pub fn owner(&self, span: &str) -> Option<String> {
        labels::value_after(span, &labels::OWNER)
    }

    /// Text after `Trnr:`
    pub fn trainer(&self, span: &str) -> Option<String> {
        labels::value_after(span, &labels::TRAINER)
    }

    /// Text after `Brdr:`
    pub fn breeder(&self, span: &str) -> Option<String> {
        labels::value_after(span, &labels::BREEDER)
    }

    /// Text after `Sire:`
    pub fn sire(&self, span: &str) -> Option<String> {
        labels::value_after(span, &labels::SIRE)
    }

    /// Text after `Dam:`
    pub fn dam(&self, span: &str) -> Option<String> {
        labels::value_after(span, &labels::DAM)
    }

    /// Jockey name with its parenthesized record, or an all-caps line near
    /// the top of the span with no record
    pub fn jockey(&self, span: &str) -> (Option<String>, Option<JockeyRecord>) {
        identity::jockey(span, self.config.jockey_fallback_lines)
    }

    /// Sex code and age
    pub fn sex_age(&self, span: &str) -> (Option<Sex>, Option<u8>) {
        identity::sex_age(span, self.config.sex_age_max_lines)
    }

    /// `Life:` summary and per-year summaries
    pub fn aggregate_stats(&self, span: &str) -> AggregateStats {
        stats::aggregate_stats(span)
    }

    /// Workout lines in document order
    pub fn workouts(&self, span: &str) -> Vec<String> {
        lines::workouts(span, self.config.max_workout_line_len)
    }

    /// Note lines in document order, duplicates kept
    pub fn notes(&self, span: &str) -> Vec<String> {
        lines::notes(span)
    }

    /// Morning-line odds printed above the race table
    pub fn morning_line(&self, span: &str) -> Option<String> {
        lines::morning_line(span, table_start(span))
    }

    /// Racing colours line
    pub fn silks(&self, span: &str) -> Option<String> {
        lines::silks(span)
    }

    /// Value after `Prime Power:`
    pub fn prime_power(&self, span: &str) -> Option<String> {
        stats::prime_power(span)
    }

    /// Lines carrying percentages or statistic labels
    pub fn stat_lines(&self, span: &str) -> Vec<String> {
        stats::stat_lines(span)
    }

    /// Surface and distance records grouped by label
    pub fn surface_records(&self, span: &str) -> Vec<SurfaceRecord> {
        stats::surface_records(span)
    }

    /// Race table rows
    pub fn race_history(&self, span: &str) -> Vec<RaceLine> {
        parse_race_history(span, &self.config)
    }

    /// Run every extractor over `span` and assemble the record
    ///
    /// `fallback_name` is used only when the span's own marker cannot be read.
    pub fn extract(&self, post: Post, span: &str, fallback_name: Option<&str>) -> EntrantRecord {
        let header = self.header(span);
        let (jockey_name, jockey_record) = self.jockey(span);
        let (sex, age) = self.sex_age(span);

        EntrantRecord {
            name: header.name.or_else(|| fallback_name.map(str::to_string)),
            tag: header.tag,
            morning_line: self.morning_line(span),
            silks: self.silks(span),
            connections: Connections {
                owner: self.owner(span),
                jockey_name,
                jockey_record,
                trainer: self.trainer(span),
                breeder: self.breeder(span),
            },
            pedigree: Pedigree {
                sex,
                age,
                sire: self.sire(span),
                dam: self.dam(span),
            },
            prime_power: self.prime_power(span),
            aggregate_stats: self.aggregate_stats(span),
            notes: self.notes(span),
            workouts: self.workouts(span),
            stat_lines: self.stat_lines(span),
            surface_records: self.surface_records(span),
            race_history: self.race_history(span),
            ..EntrantRecord::empty(post, span)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractors() -> FieldExtractors {
        FieldExtractors::new(&ExtractorConfig::default())
    }

    #[test]
    fn test_missing_owner_does_not_block_others() {
        let span = "4 Lone Star (S 1)\nTrnr: B Baffert\nB. c. 3\n05Oct25Bel 7f ft 1:22 Md 2 SmithJ 4.00";
        let record = extractors().extract(Post::Assigned(4), span, None);
        assert_eq!(record.connections.owner, None);
        assert_eq!(record.connections.trainer.as_deref(), Some("B Baffert"));
        assert_eq!(record.pedigree.sex, Some(Sex::Colt));
        assert_eq!(record.pedigree.age, Some(3));
        assert_eq!(record.race_history.len(), 1);
        assert_eq!(record.raw_span, span);
    }

    #[test]
    fn test_empty_span_is_all_misses() {
        let record = extractors().extract(Post::Unattributed, "", None);
        assert_eq!(record.name, None);
        assert_eq!(record.tag, None);
        assert_eq!(record.connections, Connections::default());
        assert!(record.notes.is_empty());
        assert!(record.workouts.is_empty());
        assert!(record.race_history.is_empty());
    }

    #[test]
    fn test_fallback_name_when_marker_unreadable() {
        let record = extractors().extract(Post::Assigned(2), "garbled", Some("Boundary Name"));
        assert_eq!(record.name.as_deref(), Some("Boundary Name"));
    }

    #[test]
    fn test_full_entrant_block() {
        let span = "\
6 Midnight Cowboy (E/P 5)
9/2
Own: Sunrise Stables
ORTIZ JOSE L (210 41-35-30 20%)
Dk. B. g. 4 (Mar)
Sire: Street Boss (Street Cry)
Dam: Prairie Rose (Rahy)
Brdr: Winchester Farm (KY)
Trnr: Pletcher Todd A (88 20-15-12 23%)
Prime Power: 131.4 (2nd)
Life: 14 4 - 3 - 2 $312,400 97
2025 6 2-1-1 $150,000 97 Fst (99) 10 3 2 1
Sire Stats: AWD 6.8 15%Mud
ñ Won last race
DATE TRK DIST
12Sep25 Sar 1 1/16m fm :23.1 :47.2 1:11.4 1:42.3 Alw 50000 4 2 3 1/2 2 1 1 1/2 OrtizJL *1.20 Brave Heart-Quick Step-Lone Star gamely 9
28Aug25Sar 6f ft 22.45 45.10 1:09.8 Clm 25000 7 5 4 3 2 OrtizJL 3.10 Fleet Foot, Sky High; bumped start 8
28Sep Bel 4f ft :48 B 5/20";
        let record = extractors().extract(Post::Assigned(6), span, None);

        assert_eq!(record.name.as_deref(), Some("Midnight Cowboy"));
        assert_eq!(record.tag.as_deref(), Some("E/P 5"));
        assert_eq!(record.morning_line.as_deref(), Some("9/2"));
        assert_eq!(record.silks, None);
        assert_eq!(record.connections.owner.as_deref(), Some("Sunrise Stables"));
        assert_eq!(record.connections.jockey_name.as_deref(), Some("ORTIZ JOSE L"));
        assert_eq!(record.connections.jockey_record.as_ref().map(|r| r.wins), Some(41));
        assert_eq!(
            record.connections.trainer.as_deref(),
            Some("Pletcher Todd A (88 20-15-12 23%)")
        );
        assert_eq!(record.connections.breeder.as_deref(), Some("Winchester Farm (KY)"));
        assert_eq!(record.pedigree.sex, Some(Sex::Gelding));
        assert_eq!(record.pedigree.age, Some(4));
        assert_eq!(record.pedigree.sire.as_deref(), Some("Street Boss (Street Cry)"));
        assert_eq!(record.pedigree.dam.as_deref(), Some("Prairie Rose (Rahy)"));
        assert_eq!(record.prime_power.as_deref(), Some("131.4 (2nd)"));
        assert_eq!(record.aggregate_stats.life.as_deref(), Some("14 4 - 3 - 2 $312,400 97"));
        assert_eq!(record.aggregate_stats.year("2025"), Some("6 2-1-1 $150,000 97"));
        assert_eq!(record.notes, vec!["ñ Won last race"]);
        assert_eq!(record.workouts, vec!["28Sep Bel 4f ft :48 B 5/20"]);
        assert!(record.surface_records.is_empty());
        assert!(record.stat_lines.contains(&"Sire Stats: AWD 6.8 15%Mud".to_string()));

        assert_eq!(record.race_history.len(), 2);
        let second = &record.race_history[1];
        assert_eq!(second.track.as_deref(), Some("Sar"));
        assert_eq!(second.race_type.as_deref(), Some("Clm 25000"));
        assert_eq!(second.post_in_race, Some(7));
        assert_eq!(second.jockey.as_deref(), Some("OrtizJL"));
        assert_eq!(second.odds.as_deref(), Some("3.10"));
        assert_eq!(second.field_size, Some(8));
        assert_eq!(second.top_finishers, vec!["Fleet Foot", "Sky High"]);
        assert_eq!(second.comment.as_deref(), Some("bumped start"));
    }
}
