//! Formatting and display logic
//!
//! Pure functions for formatting country data for display, including the
//! "N/A" fallbacks used wherever an optional field is missing.

/// Placeholder for a missing value
pub const NOT_AVAILABLE: &str = "N/A";

/// Group a population with comma thousands separators
///
/// # Examples
/// ```
/// use wheretui::logic::formatting::format_population;
///
/// assert_eq!(format_population(0), "0");
/// assert_eq!(format_population(999), "999");
/// assert_eq!(format_population(1000), "1,000");
/// assert_eq!(format_population(31072940), "31,072,940");
/// ```
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Value or "N/A" when missing or empty
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// First capital, as shown on a list card
pub fn first_capital(capitals: &[String]) -> &str {
    or_na(capitals.first().map(String::as_str))
}

/// All capitals, as shown in the detail view
pub fn join_capitals(capitals: &[String]) -> String {
    if capitals.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        capitals.join(", ")
    }
}

/// Truncate to a display width, appending an ellipsis when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_population_groups() {
        assert_eq!(format_population(12), "12");
        assert_eq!(format_population(123456), "123,456");
        assert_eq!(format_population(1234567), "1,234,567");
        assert_eq!(format_population(1402112000), "1,402,112,000");
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("Western Africa")), "Western Africa");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }

    #[test]
    fn test_capitals() {
        let capitals = vec!["Pretoria".to_string(), "Bloemfontein".to_string(), "Cape Town".to_string()];
        assert_eq!(first_capital(&capitals), "Pretoria");
        assert_eq!(join_capitals(&capitals), "Pretoria, Bloemfontein, Cape Town");
        assert_eq!(first_capital(&[]), "N/A");
        assert_eq!(join_capitals(&[]), "N/A");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Ghana", 10), "Ghana");
        assert_eq!(truncate_to_width("United Kingdom", 7), "United…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
