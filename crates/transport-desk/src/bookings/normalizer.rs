const INVISIBLE: [char; 2] = ['\u{feff}', '\u{200b}'];

pub(crate) fn clean_header(value: &str) -> String {
    value.replace(INVISIBLE, "").trim().to_string()
}

/// Stored codes and queries both go through here so they compare equal.
pub(crate) fn normalize_code(value: &str) -> String {
    value.replace(INVISIBLE, "").trim().to_uppercase()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so "to VENUE" and "To venue" read the same.
pub(crate) fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

pub(crate) fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
