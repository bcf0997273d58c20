use super::super::scoring::{BandScale, ScoringScheme};

/// Strip BOM/zero-width characters, collapse runs of whitespace, and
/// case-fold an answer cell for label lookup.
pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Resolve a normalized answer cell to its ordinal value on the scheme's
/// scale. Numeric cells pass through when in range; word labels map per
/// band table. `None` means the cell is unrecognizable.
pub(crate) fn answer_value(token: &str, scheme: ScoringScheme) -> Option<u8> {
    if let Ok(value) = token.parse::<u8>() {
        return scheme.contains(value).then_some(value);
    }

    let value = match scheme.bands {
        BandScale::Percentage => match token {
            "never" => 0,
            "rarely" => 1,
            "sometimes" => 2,
            "often" => 3,
            "very often" => 4,
            _ => return None,
        },
        BandScale::RawMean => match token {
            "never" => 1,
            "occasionally" => 2,
            "often" => 3,
            "very often" => 4,
            _ => return None,
        },
    };

    Some(value)
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_token(value)
}
