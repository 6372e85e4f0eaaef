//! Text normalization for PDF-extracted past performances
//!
//! PDF text extraction leaves non-breaking spaces, stray control characters
//! and single-glyph fractions in the stream. The normalizer maps them to plain
//! ASCII, collapses horizontal whitespace and keeps every line break, since
//! line starts anchor entry markers and workout lines.

use furlong_domain::RawDocument;

/// Glyphs replaced by an ASCII spelling
///
/// Fractions gain a leading space so `6½f` reads `6 1/2f`.
const GLYPHS: &[(char, &str)] = &[
    ('½', " 1/2"),
    ('¼', " 1/4"),
    ('¾', " 3/4"),
    ('⅓', " 1/3"),
    ('⅔', " 2/3"),
    ('⅕', " 1/5"),
    ('⅖', " 2/5"),
    ('⅗', " 3/5"),
    ('⅘', " 4/5"),
    ('⅙', " 1/6"),
    ('⅚', " 5/6"),
    ('⅛', " 1/8"),
    ('⅜', " 3/8"),
    ('⅝', " 5/8"),
    ('⅞', " 7/8"),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{2044}', "/"),
];

/// Normalize raw extracted text
///
/// Total over any input. `\r\n` and lone `\r` become `\n`; other whitespace
/// becomes a single space; control characters, zero-width characters and the
/// byte-order mark are dropped; spaces at either end of a line are removed.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    push_newline(&mut out);
                }
            }
            '\n' => push_newline(&mut out),
            c if c.is_whitespace() => push_space(&mut out),
            c if is_dropped(c) => {}
            c => match glyph(c) {
                Some(rep) => {
                    for r in rep.chars() {
                        if r == ' ' {
                            push_space(&mut out);
                        } else {
                            out.push(r);
                        }
                    }
                }
                None => out.push(c),
            },
        }
    }

    trim_line_end(&mut out);
    out
}

/// Normalize raw text into a [`RawDocument`]
pub fn normalize_document(raw: &str) -> RawDocument {
    RawDocument::new(normalize(raw))
}

fn glyph(c: char) -> Option<&'static str> {
    GLYPHS.iter().find(|(g, _)| *g == c).map(|(_, rep)| *rep)
}

fn is_dropped(c: char) -> bool {
    c.is_control() || matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

fn push_space(out: &mut String) {
    if !(out.is_empty() || out.ends_with(' ') || out.ends_with('\n')) {
        out.push(' ');
    }
}

fn push_newline(out: &mut String) {
    trim_line_end(out);
    out.push('\n');
}

fn trim_line_end(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert!(normalize_document("").is_empty());
    }

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(normalize("3  Fast\tRocket \u{00A0} (E 4)"), "3 Fast Rocket (E 4)");
    }

    #[test]
    fn test_preserves_line_breaks() {
        assert_eq!(normalize("a  \n\n  b\r\nc\rd"), "a\n\nb\nc\nd");
    }

    #[test]
    fn test_fraction_glyphs() {
        assert_eq!(normalize("6½f"), "6 1/2f");
        assert_eq!(normalize("3 ¾ length"), "3 3/4 length");
        assert_eq!(normalize("1⅛m"), "1 1/8m");
    }

    #[test]
    fn test_strips_control_and_zero_width() {
        assert_eq!(normalize("\u{FEFF}Own:\u{0007} J\u{200B} Smith\u{0}"), "Own: J Smith");
    }

    #[test]
    fn test_keeps_note_glyphs() {
        assert_eq!(normalize("ñ Won last race\n× Beaten by weaker"), "ñ Won last race\n× Beaten by weaker");
    }

    #[test]
    fn test_curly_quotes_and_dashes() {
        assert_eq!(normalize("Rock’s Dream – Other"), "Rock's Dream - Other");
    }

    #[test]
    fn test_is_idempotent() {
        let once = normalize(" 5½ \u{00A0}lengths \r\n\t next ");
        assert_eq!(normalize(&once), once);
    }
}
