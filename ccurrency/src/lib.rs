//! Currency resolution, fixed-rate conversion, and their tool bindings.
//!
//! The supported set, alias table, and rate table are read-only constants;
//! every operation here is pure and synchronous.

mod convert;
mod resolve;
mod tools;

pub mod prelude {
    pub use crate::{
        ConversionOutcome, ConvertTool, ListSupportedTool, ResolveCurrencyTool, ResolvedCurrency,
        convert, currency_registry, known_pairs, resolve, supported_codes,
    };
}

pub use convert::{ConversionOutcome, convert, known_pairs};
pub use resolve::{ResolvedCurrency, SUPPORTED_CODES, resolve, supported_codes};
pub use tools::{ConvertTool, ListSupportedTool, ResolveCurrencyTool, currency_registry};
