//! Currency code resolution against the fixed supported set.
//!
//! ```rust
//! use ccurrency::{ResolvedCurrency, resolve};
//!
//! assert_eq!(resolve(" Baht "), ResolvedCurrency::Code("THB"));
//! assert_eq!(resolve("usd"), ResolvedCurrency::Code("USD"));
//! assert_eq!(resolve("doubloon"), ResolvedCurrency::Unknown);
//! ```

use std::fmt::{Display, Formatter};

pub const SUPPORTED_CODES: [&str; 4] = ["USD", "THB", "EUR", "JPY"];

const NAME_TO_ISO: [(&str, &str); 4] = [
    ("baht", "THB"),
    ("dollar", "USD"),
    ("euro", "EUR"),
    ("yen", "JPY"),
];

pub fn supported_codes() -> &'static [&'static str] {
    &SUPPORTED_CODES
}

/// Canonical form of a currency input. `Unknown` is a normal result, not a
/// failure: any input outside the supported set resolves to it, whether it
/// was a free-form name or an ISO-looking code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedCurrency {
    Code(&'static str),
    Unknown,
}

impl ResolvedCurrency {
    pub const UNKNOWN_LABEL: &'static str = "UNKNOWN";

    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::Code(code) => Some(code),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Code(code) => code,
            Self::Unknown => Self::UNKNOWN_LABEL,
        }
    }
}

impl Display for ResolvedCurrency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

pub fn resolve(input: &str) -> ResolvedCurrency {
    let code = input.trim().to_ascii_uppercase();
    if let Some(found) = SUPPORTED_CODES
        .iter()
        .copied()
        .find(|supported| *supported == code)
    {
        return ResolvedCurrency::Code(found);
    }

    let name = input.trim().to_ascii_lowercase();
    NAME_TO_ISO
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|&(_, iso)| ResolvedCurrency::Code(iso))
        .unwrap_or(ResolvedCurrency::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolving_an_iso_code_returns_it_unchanged() {
        for code in supported_codes() {
            assert_eq!(resolve(code), ResolvedCurrency::Code(code));
        }
    }

    #[test]
    fn resolve_is_idempotent_over_aliases() {
        let first = resolve(" Baht ");
        assert_eq!(first, ResolvedCurrency::Code("THB"));
        assert_eq!(resolve(first.as_label()), first);
    }

    #[test]
    fn resolve_normalizes_case_and_whitespace() {
        assert_eq!(resolve("  usd"), ResolvedCurrency::Code("USD"));
        assert_eq!(resolve("EURO"), ResolvedCurrency::Code("EUR"));
        assert_eq!(resolve("Yen"), ResolvedCurrency::Code("JPY"));
    }

    #[test]
    fn unrecognized_input_is_unknown_not_an_error() {
        assert!(resolve("ABC").is_unknown());
        assert!(resolve("doubloon").is_unknown());
        assert!(resolve("").is_unknown());
        assert_eq!(resolve("ABC").as_label(), "UNKNOWN");
    }
}
