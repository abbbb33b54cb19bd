//! Small helpers for the length-carrying text that feeds the lexer.
//!
//! Expressions may come from fixed-size buffers that are NUL-terminated before
//! their declared length; [`until_nul`] cuts them down to the meaningful part.
//! The numeric conversions accept plain ASCII digits only and report failure
//! with `None` instead of producing a misleading zero.

/// The prefix of `text` that precedes the first NUL byte (all of it if there
/// is none).
pub fn until_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Parse a run of decimal digits into a `u64`.
pub fn parse_uint(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    text.bytes().try_fold(0u64, |acc, b| {
        let digit = digit_value(b)?;
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    })
}

/// Parse an optionally negative run of decimal digits into an `i64`.
pub fn parse_int(text: &str) -> Option<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() {
        return None;
    }
    // Accumulate towards the sign so that `i64::MIN` is representable.
    digits.bytes().try_fold(0i64, |acc, b| {
        let digit = i64::from(digit_value(b)?);
        let acc = acc.checked_mul(10)?;
        if negative {
            acc.checked_sub(digit)
        } else {
            acc.checked_add(digit)
        }
    })
}

/// Parse `[-]digits[.digits]` into an `f64`.
///
/// At least one digit is required before the point, and at least one after it
/// when a point is present.
pub fn parse_double(text: &str) -> Option<f64> {
    let (_, body) = split_sign(text);
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }

    // The shape is validated above, so the standard float parser gives the
    // correctly rounded value.
    text.parse().ok()
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

#[inline]
fn digit_value(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}
