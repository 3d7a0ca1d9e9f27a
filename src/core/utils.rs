//! Formatting helpers shared by generators, the decorator and file naming

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::orders::Language;

const WELSH_MONTHS: [&str; 12] = [
    "Ionawr",
    "Chwefror",
    "Mawrth",
    "Ebrill",
    "Mai",
    "Mehefin",
    "Gorffennaf",
    "Awst",
    "Medi",
    "Hydref",
    "Tachwedd",
    "Rhagfyr",
];

/// Converts a string to snake_case, used for order file names.
///
/// Handles camelCase, SCREAMING_SNAKE_CASE, kebab-case and space-separated
/// input. Characters that are neither alphanumeric nor separators are dropped.
///
/// # Examples
/// ```
/// use order_docgen::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("C32A_CARE_ORDER"), "c32a_care_order");
/// assert_eq!(to_snake_case("Interim order for Jane"), "interim_order_for_jane");
/// assert_eq!(to_snake_case("contactOrder"), "contact_order");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if (ch == '-' || ch == '_' || ch.is_whitespace())
            && !result.is_empty()
            && !result.ends_with('_')
        {
            result.push('_');
            prev_is_lowercase = false;
        } else {
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Formats a date as `d MMMM yyyy` in the requested language
pub fn format_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::English => date.format("%-d %B %Y").to_string(),
        Language::Welsh => format!(
            "{} {} {}",
            date.day(),
            WELSH_MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}

/// Formats a date and time as `d MMMM yyyy, h:mma`
pub fn format_date_time(date_time: NaiveDateTime, language: Language) -> String {
    format!(
        "{}, {}",
        format_date(date_time.date(), language),
        date_time.format("%-I:%M%P")
    )
}

/// Groups a CCD case id into the `1234-5678-9012-3456` display form
pub fn format_ccd_case_number(case_id: u64) -> String {
    let digits = format!("{case_id:016}");
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns `None` for absent or whitespace-only text
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
