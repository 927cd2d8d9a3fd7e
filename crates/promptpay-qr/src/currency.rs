//! ISO 4217 lookup for the regional currencies the scheme supports.

/// `(alphabetic, numeric)` ISO 4217 code pairs. The scheme covers these ten
/// regional currencies; the table is static and never mutated.
const CURRENCIES: &[(&str, &str)] = &[
    ("IDR", "360"), // Indonesia
    ("MMK", "104"), // Myanmar
    ("BND", "096"), // Brunei
    ("KHR", "116"), // Cambodia
    ("LAK", "418"), // Laos
    ("MYR", "458"), // Malaysia
    ("PHP", "608"), // Philippines
    ("SGD", "702"), // Singapore
    ("THB", "764"), // Thailand
    ("VND", "704"), // Vietnam
];

/// Alphabetic code for a 3-digit numeric code, `""` when unknown.
pub fn alpha_code(numeric: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(_, n)| *n == numeric)
        .map(|(a, _)| *a)
        .unwrap_or("")
}

/// Numeric code for an alphabetic code, `""` when unknown.
pub fn numeric_code(alpha: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(a, _)| *a == alpha)
        .map(|(_, n)| *n)
        .unwrap_or("")
}
