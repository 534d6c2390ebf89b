//! Display formatting for search result fields.

/// Render an ISO-8601 duration ("PT1H2M3S") as "1:02:03".
///
/// Minutes and seconds are zero-padded once an hour (or minute) component
/// exists; a bare seconds value renders as "0:SS". Strings that don't look
/// like a duration are returned unchanged — better a raw value in the card
/// than no card.
pub fn format_duration(iso: &str) -> String {
    let Some(rest) = iso.strip_prefix("PT").or_else(|| iso.strip_prefix("P")) else {
        return iso.to_string();
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut number = String::new();
    for ch in rest.chars() {
        match ch {
            '0'..='9' => number.push(ch),
            'H' | 'M' | 'S' | 'D' | 'T' => {
                let value: u64 = match number.parse() {
                    Ok(v) => v,
                    Err(_) if ch == 'T' && number.is_empty() => continue,
                    Err(_) => return iso.to_string(),
                };
                number.clear();
                match ch {
                    'D' => hours += value * 24,
                    'H' => hours += value,
                    'M' => minutes = value,
                    'S' => seconds = value,
                    _ => {}
                }
            }
            _ => return iso.to_string(),
        }
    }

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Thousands-separated view count: 1693886536 -> "1,693,886,536".
pub fn format_views(views: u64) -> String {
    let digits = views.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
