//! Fixed-rate conversion over the supported currency pairs.
//!
//! ```rust
//! use ccurrency::{ConversionOutcome, convert};
//! use serde_json::json;
//!
//! match convert(&json!(100), "USD", "THB") {
//!     ConversionOutcome::Converted { rate, converted, .. } => {
//!         assert_eq!(rate, 35.0);
//!         assert_eq!(converted, 3500.0);
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::resolve::{resolve, supported_codes};

const RATE_TABLE: [((&str, &str), f64); 6] = [
    (("USD", "THB"), 35.0),
    (("THB", "USD"), 0.0286),
    (("THB", "EUR"), 0.025),
    (("EUR", "THB"), 40.0),
    (("USD", "EUR"), 0.92),
    (("EUR", "USD"), 1.087),
];

pub fn known_pairs() -> Vec<String> {
    let mut pairs = RATE_TABLE
        .iter()
        .map(|((base, quote), _)| format!("{base}->{quote}"))
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
}

fn rate_for(base: &str, quote: &str) -> Option<f64> {
    RATE_TABLE
        .iter()
        .find(|((b, q), _)| *b == base && *q == quote)
        .map(|(_, rate)| *rate)
}

/// Result of a conversion attempt. Every failure mode is a value so the
/// payload can be serialized back into a conversation; callers branch on the
/// `kind` tag rather than parsing message text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Converted {
        amount: f64,
        base: String,
        quote: String,
        rate: f64,
        converted: f64,
    },
    InvalidAmount {
        given: String,
    },
    UnknownCurrency {
        base: String,
        quote: String,
        supported: Vec<String>,
    },
    MissingRate {
        base: String,
        quote: String,
        known_pairs: Vec<String>,
    },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Pure and deterministic: identical inputs always produce the identical
/// outcome. The amount may arrive as a JSON number or a numeric string.
pub fn convert(amount: &Value, base: &str, quote: &str) -> ConversionOutcome {
    let Some(amount) = parse_amount(amount) else {
        let given = match amount {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        return ConversionOutcome::InvalidAmount { given };
    };

    let resolved_base = resolve(base);
    let resolved_quote = resolve(quote);
    if resolved_base.is_unknown() || resolved_quote.is_unknown() {
        return ConversionOutcome::UnknownCurrency {
            base: base.to_string(),
            quote: quote.to_string(),
            supported: supported_codes()
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
    }

    let base = resolved_base.as_label();
    let quote = resolved_quote.as_label();
    let Some(rate) = rate_for(base, quote) else {
        return ConversionOutcome::MissingRate {
            base: base.to_string(),
            quote: quote.to_string(),
            known_pairs: known_pairs(),
        };
    };

    ConversionOutcome::Converted {
        amount,
        base: base.to_string(),
        quote: quote.to_string(),
        rate,
        converted: round4(amount * rate),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn convert_is_deterministic_for_known_pairs() {
        let outcome = convert(&json!(100), "USD", "THB");
        assert_eq!(
            outcome,
            ConversionOutcome::Converted {
                amount: 100.0,
                base: "USD".to_string(),
                quote: "THB".to_string(),
                rate: 35.0,
                converted: 3500.0,
            }
        );
        assert_eq!(outcome, convert(&json!(100), "USD", "THB"));
    }

    #[test]
    fn convert_resolves_names_before_lookup() {
        match convert(&json!(250), "baht", "euro") {
            ConversionOutcome::Converted {
                base,
                quote,
                rate,
                converted,
                ..
            } => {
                assert_eq!(base, "THB");
                assert_eq!(quote, "EUR");
                assert_eq!(rate, 0.025);
                assert_eq!(converted, 6.25);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn converted_amounts_are_rounded_to_four_decimal_places() {
        match convert(&json!(1), "THB", "USD") {
            ConversionOutcome::Converted { converted, .. } => assert_eq!(converted, 0.0286),
            other => panic!("unexpected outcome: {other:?}"),
        }

        match convert(&json!(0.333_333), "THB", "EUR") {
            ConversionOutcome::Converted { converted, .. } => assert_eq!(converted, 0.0083),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn string_amounts_parse_like_numbers() {
        match convert(&json!("12.5"), "USD", "EUR") {
            ConversionOutcome::Converted { amount, .. } => assert_eq!(amount, 12.5),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn unparseable_amount_is_a_value_not_a_panic() {
        assert_eq!(
            convert(&json!("abc"), "USD", "THB"),
            ConversionOutcome::InvalidAmount {
                given: "abc".to_string()
            }
        );
        assert!(matches!(
            convert(&json!(null), "USD", "THB"),
            ConversionOutcome::InvalidAmount { .. }
        ));
    }

    #[test]
    fn unknown_currency_names_the_inputs_and_lists_support() {
        match convert(&json!(10), "ABC", "USD") {
            ConversionOutcome::UnknownCurrency {
                base,
                quote,
                supported,
            } => {
                assert_eq!(base, "ABC");
                assert_eq!(quote, "USD");
                assert_eq!(supported, vec!["USD", "THB", "EUR", "JPY"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn missing_rate_lists_all_known_pairs() {
        match convert(&json!(5), "JPY", "USD") {
            ConversionOutcome::MissingRate {
                base,
                quote,
                known_pairs,
            } => {
                assert_eq!(base, "JPY");
                assert_eq!(quote, "USD");
                assert_eq!(known_pairs.len(), 6);
                assert!(known_pairs.contains(&"USD->THB".to_string()));
                let mut sorted = known_pairs.clone();
                sorted.sort();
                assert_eq!(known_pairs, sorted);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn outcomes_serialize_with_a_kind_tag() {
        let success = serde_json::to_value(convert(&json!(100), "USD", "THB"))
            .expect("outcome should serialize");
        assert_eq!(success["kind"], json!("converted"));
        assert_eq!(success["rate"], json!(35.0));
        assert_eq!(success["converted"], json!(3500.0));

        let failure = serde_json::to_value(convert(&json!(10), "ABC", "USD"))
            .expect("outcome should serialize");
        assert_eq!(failure["kind"], json!("unknown_currency"));
        assert_eq!(failure["supported"], json!(["USD", "THB", "EUR", "JPY"]));
    }
}
