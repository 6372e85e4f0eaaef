//! Race time tokens and their conversion to seconds
//!
//! Times arrive as `1:11`, `1:11.45`, `:46`, bare decimal seconds `22.45`, or
//! with the colon lost in extraction (`46`, `112` for `1:12`).

/// Convert a time token to seconds
///
/// `M:SS(.ff)` is `M * 60 + SS(.ff)`; `:SS` is `0:SS`; a bare `SS.ff` is
/// seconds; a colon-stripped integer of one or two digits is seconds and of
/// three or four digits is minutes followed by two seconds digits. Anything
/// else, including seconds of 60 or more, is `None`. Never panics.
///
/// ```
/// use furlong_extractor::time_to_seconds;
///
/// assert_eq!(time_to_seconds(":46"), Some(46.0));
/// assert_eq!(time_to_seconds("1:11"), Some(71.0));
/// assert_eq!(time_to_seconds("1:75"), None);
/// ```
pub fn time_to_seconds(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some((minutes, seconds)) = token.split_once(':') {
        let minutes = if minutes.is_empty() { 0 } else { parse_digits(minutes)? };
        let seconds = parse_seconds(seconds)?;
        return Some(f64::from(minutes) * 60.0 + seconds);
    }

    if token.contains('.') {
        return parse_seconds(token);
    }

    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match token.len() {
        1 | 2 => parse_seconds(token),
        3 | 4 => {
            let (minutes, seconds) = token.split_at(token.len() - 2);
            let minutes = parse_digits(minutes)?;
            let seconds = parse_seconds(seconds)?;
            Some(f64::from(minutes) * 60.0 + seconds)
        }
        _ => None,
    }
}

/// Whether a row token has the shape of a leader call time
///
/// Colon and decimal forms always qualify. Colon-stripped integers only
/// qualify when they cannot be a post position: two digits from 21 to 59, or
/// three digits `MSS` with a minute of 1 or 2.
pub fn is_time_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    let digits = |s: &[u8]| !s.is_empty() && s.iter().all(u8::is_ascii_digit);

    if let Some(colon) = token.find(':') {
        let (minutes, rest) = (&bytes[..colon], &bytes[colon + 1..]);
        if minutes.len() > 2 || (!minutes.is_empty() && !digits(minutes)) {
            return false;
        }
        return is_seconds_shape(rest);
    }

    if token.contains('.') {
        return bytes.len() >= 4 && bytes[2] == b'.' && is_seconds_shape(bytes);
    }

    match bytes {
        [a, b] if digits(bytes) => matches!((*a, *b), (b'2', b'1'..=b'9') | (b'3'..=b'5', _)),
        [m, s1, _] if digits(bytes) => matches!(*m, b'1' | b'2') && *s1 <= b'5',
        _ => false,
    }
}

/// `SS` or `SS.f` / `SS.ff`
fn is_seconds_shape(bytes: &[u8]) -> bool {
    let (whole, frac) = match bytes.iter().position(|b| *b == b'.') {
        Some(dot) => (&bytes[..dot], Some(&bytes[dot + 1..])),
        None => (bytes, None),
    };
    let whole_ok = whole.len() == 2 && whole.iter().all(u8::is_ascii_digit) && whole[0] <= b'5';
    let frac_ok = frac.map_or(true, |f| (1..=2).contains(&f.len()) && f.iter().all(u8::is_ascii_digit));
    whole_ok && frac_ok
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_seconds(s: &str) -> Option<f64> {
    let (whole, frac) = match s.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (s, None),
    };
    let whole = parse_digits(whole)?;
    if whole >= 60 {
        return None;
    }
    let frac = match frac {
        Some(f) if f.is_empty() || f.len() > 3 || !f.bytes().all(|b| b.is_ascii_digit()) => return None,
        Some(f) => f64::from(parse_digits(f)?) / 10f64.powi(f.len() as i32),
        None => 0.0,
    };
    Some(f64::from(whole) + frac)
}
