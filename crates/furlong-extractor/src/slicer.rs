//! Cut normalized text into one span per entrant

use furlong_domain::EntryBoundary;

/// Text belonging to one entrant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpan<'a> {
    /// The boundary that opened this span
    pub boundary: EntryBoundary,

    /// From the boundary offset up to the next boundary or end of text
    pub text: &'a str,
}

/// Result of slicing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slices<'a> {
    /// Text before the first boundary (document header, race conditions)
    pub prefix: &'a str,

    /// One span per boundary, in document order
    pub spans: Vec<EntrySpan<'a>>,
}

impl Slices<'_> {
    /// Concatenate the prefix and all spans
    ///
    /// Always equal to the text that was sliced.
    pub fn reconstruct(&self) -> String {
        let mut out = String::from(self.prefix);
        for span in &self.spans {
            out.push_str(span.text);
        }
        out
    }
}

/// Slice `text` at the given boundaries
///
/// Span `i` runs from boundary `i` to boundary `i + 1` (or end of text).
/// Boundaries that are out of range, not on a character boundary, or not
/// strictly after the previous one are skipped, so the spans stay contiguous
/// and non-overlapping whatever the caller passes in.
pub fn slice<'a>(text: &'a str, boundaries: &[EntryBoundary]) -> Slices<'a> {
    let mut usable: Vec<&EntryBoundary> = Vec::with_capacity(boundaries.len());
    for boundary in boundaries {
        let in_order = usable.last().map_or(true, |prev| boundary.offset > prev.offset);
        if in_order && boundary.offset <= text.len() && text.is_char_boundary(boundary.offset) {
            usable.push(boundary);
        }
    }

    let Some(first) = usable.first() else {
        return Slices {
            prefix: text,
            spans: Vec::new(),
        };
    };

    let spans = usable
        .iter()
        .enumerate()
        .map(|(i, boundary)| {
            let end = usable.get(i + 1).map_or(text.len(), |next| next.offset);
            EntrySpan {
                boundary: (*boundary).clone(),
                text: &text[boundary.offset..end],
            }
        })
        .collect();

    Slices {
        prefix: &text[..first.offset],
        spans,
    }
}
