//! Race lines - one row of an entrant's race history

use serde::{Deserialize, Serialize};

/// One value per call point of a race
///
/// Used for leader call times (raw and in seconds) and for the entrant's
/// running position at each call. Any call can be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calls<T> {
    /// First call
    pub first: Option<T>,
    /// Second call
    pub second: Option<T>,
    /// Stretch call
    pub stretch: Option<T>,
    /// Finish
    pub finish: Option<T>,
}

impl<T> Default for Calls<T> {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
            stretch: None,
            finish: None,
        }
    }
}

impl<T> Calls<T> {
    /// Apply `f` to every present value, keeping the shape
    pub fn map<U, F>(&self, mut f: F) -> Calls<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        Calls {
            first: self.first.as_ref().and_then(&mut f),
            second: self.second.as_ref().and_then(&mut f),
            stretch: self.stretch.as_ref().and_then(&mut f),
            finish: self.finish.as_ref().and_then(&mut f),
        }
    }

    /// Values in call order, first to finish
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        [&self.first, &self.second, &self.stretch, &self.finish]
            .into_iter()
            .map(Option::as_ref)
    }

    /// True when no call has a value
    pub fn is_empty(&self) -> bool {
        self.iter().all(|v| v.is_none())
    }
}

/// One historical race of an entrant
///
/// Rows are emitted even when only the date could be read; every other
/// sub-field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RaceLine {
    /// Date token as printed, e.g. `09Oct25`
    pub date_raw: String,

    /// Track code, e.g. `Aqu`
    pub track: Option<String>,

    /// Distance as printed, e.g. `6f` or `1 1/16m`
    pub distance_raw: Option<String>,

    /// Surface/condition code, e.g. `ft`
    pub surface: Option<String>,

    /// Leader's cumulative times at each call, as printed
    pub call_times_raw: Calls<String>,

    /// Leader's cumulative times at each call, in seconds
    pub call_times_seconds: Calls<f64>,

    /// Race type or class, e.g. `Alw 50000`
    pub race_type: Option<String>,

    /// Post position in that race
    pub post_in_race: Option<u8>,

    /// Running-position tokens in print order (start through finish)
    pub call_sequence: Vec<String>,

    /// Lengths behind the leader at each call
    pub position_at_call: Calls<f64>,

    /// Final time of the race in seconds
    pub final_time_seconds: Option<f64>,

    /// Jockey in that race
    pub jockey: Option<String>,

    /// Final odds as printed, e.g. `3.50` or `*1.20`
    pub odds: Option<String>,

    /// Number of starters
    pub field_size: Option<u8>,

    /// Names of the placing horses
    pub top_finishers: Vec<String>,

    /// Trip narrative
    pub comment: Option<String>,

    /// Row text the fields were read from
    pub raw: String,
}

impl RaceLine {
    /// A row holding only its date and text
    pub fn new(date_raw: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            date_raw: date_raw.into(),
            raw: raw.into(),
            ..Default::default()
        }
    }

    /// Check the row invariants
    ///
    /// A final time must not be negative and a call time in seconds needs a
    /// non-empty raw token behind it.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.final_time_seconds {
            if t.is_nan() || t < 0.0 {
                return Err(format!("final time must be >= 0, got {}", t));
            }
        }

        let raw = [
            &self.call_times_raw.first,
            &self.call_times_raw.second,
            &self.call_times_raw.stretch,
            &self.call_times_raw.finish,
        ];
        let secs = [
            self.call_times_seconds.first,
            self.call_times_seconds.second,
            self.call_times_seconds.stretch,
            self.call_times_seconds.finish,
        ];
        for (idx, (raw, secs)) in raw.iter().zip(secs).enumerate() {
            if secs.is_some() && raw.as_deref().map_or(true, str::is_empty) {
                return Err(format!("call time {} has seconds but no raw token", idx));
            }
        }

        Ok(())
    }

    /// True when nothing beyond the date was recovered
    pub fn is_bare(&self) -> bool {
        self.track.is_none()
            && self.distance_raw.is_none()
            && self.surface.is_none()
            && self.call_times_raw.is_empty()
            && self.race_type.is_none()
            && self.call_sequence.is_empty()
            && self.jockey.is_none()
            && self.odds.is_none()
            && self.comment.is_none()
            && self.top_finishers.is_empty()
    }
}
