//! Adjustment kind: how a correction is expressed.

use std::fmt;
use std::str::FromStr;

use crate::error::MethodError;

/// Whether a correction is expressed as a difference or a ratio.
///
/// Additive kinds suit interval variables such as temperature;
/// multiplicative kinds suit ratio variables such as precipitation.
/// Parsing accepts the long spellings and the operator shorthands:
///
/// ```
/// use themis_methods::Kind;
///
/// assert_eq!("additive".parse::<Kind>().unwrap(), Kind::Additive);
/// assert_eq!("+".parse::<Kind>().unwrap(), Kind::Additive);
/// assert_eq!("*".parse::<Kind>().unwrap(), Kind::Multiplicative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Corrections are added to the input values.
    Additive,
    /// Corrections multiply the input values.
    Multiplicative,
}

impl Kind {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Additive => "additive",
            Kind::Multiplicative => "multiplicative",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = MethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "additive" | "+" => Ok(Kind::Additive),
            "multiplicative" | "*" => Ok(Kind::Multiplicative),
            other => Err(MethodError::UnknownKind {
                value: other.to_string(),
            }),
        }
    }
}
