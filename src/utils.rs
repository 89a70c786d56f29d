use serde_json::Value;

/// Leading-integer parse of a query value: surrounding whitespace is skipped,
/// an optional sign and an optional `0x` prefix are honored and parsing stops
/// at the first invalid digit. Returns `None` when no digit was read.
/// Values too large for an `i64` saturate at `i64::MAX` (or `-i64::MAX`).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(radix) else { break };
        seen = true;
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Word count requested from upstream. Missing, unparseable and zero values
/// all fall back to `default`. No range is enforced.
pub fn parse_word_count(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(parse_leading_int) {
        Some(0) | None => default,
        Some(n) => n,
    }
}

/// Join a JSON word list with single spaces. Non-string entries are rendered
/// as JSON text, `null` as an empty string.
pub fn join_words(words: &[Value]) -> String {
    words
        .iter()
        .map(|word| match word {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
