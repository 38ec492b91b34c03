//! Query string surface for hosts that pass parameters as text.
//!
//! Parses `key=value&...` strings like `?diameter=58&dpi=300&layout=hex`
//! into [`Instructions`], clamping every value to the range the host
//! accepts. Nothing here fails: bad input becomes a [`ParseWarning`] and the
//! default is used instead.
//!
//! # Example
//!
//! ```
//! use badgelayout::pack::LayoutKind;
//! use badgelayout::query::{self, ParseWarning};
//!
//! let result = query::parse("d=58&scale=1.25&rotate=90&layout=compact&dpi=2400");
//! assert_eq!(result.instructions.layout, Some(LayoutKind::Hex));
//! assert_eq!(result.instructions.dpi(), 600);
//! assert!(matches!(
//!     result.warnings.as_slice(),
//!     [ParseWarning::ValueOutOfRange { key: "dpi", .. }]
//! ));
//!
//! let crop = result.instructions.crop_parameters();
//! assert_eq!(crop.scale, 1.25);
//! assert_eq!(crop.rotation_degrees, 90.0);
//! ```

pub mod instructions;
mod parse;

pub use instructions::Instructions;

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed instructions.
    pub instructions: Instructions,
    /// Non-fatal parse warnings, in input order.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A value parsed but lay outside the accepted range and was clamped.
    ValueOutOfRange {
        key: &'static str,
        value: String,
        min: f64,
        max: f64,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
