//! Text and serde forms of a [`CubicBezier`].
//!
//! The text form is CSS syntax, `cubic-bezier(x1, y1, x2, y2)`; the
//! function name may be omitted and commas and whitespace both separate
//! values.
//!
//! On the wire a curve is written as the object `{"x1":..,"y1":..,"x2":..,"y2":..}`
//! and read back from any of:
//!
//! ```json
//! {"x1": 0.42, "y1": 0.0, "x2": 0.58, "y2": 1.0}
//! [0.42, 0.0, 0.58, 1.0]
//! "cubic-bezier(0.42, 0, 0.58, 1)"
//! ```

use crate::bezier::{CubicBezier, DomainError};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Errors from parsing the text form of a curve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The text is not `cubic-bezier(...)` or a bare list.
    #[error("malformed curve: {0:?}")]
    Syntax(String),
    /// Not exactly four values.
    #[error("expected 4 control values, got {0}")]
    Arity(usize),
    /// A value is not a number.
    #[error("invalid number: {0:?}")]
    Number(String),
    /// The values parse but do not describe a timing function.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

const FUNCTION_NAME: &str = "cubic-bezier";

/// Strip an optional `cubic-bezier( … )` wrapper (case-insensitive).
fn arguments(s: &str) -> Result<&str, ParseError> {
    let s = s.trim();
    let has_name = s
        .get(..FUNCTION_NAME.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(FUNCTION_NAME));
    if !has_name {
        return Ok(s);
    }
    s[FUNCTION_NAME.len()..]
        .trim_start()
        .strip_prefix('(')
        .and_then(|rest| rest.trim_end().strip_suffix(')'))
        .ok_or_else(|| ParseError::Syntax(s.to_string()))
}

impl FromStr for CubicBezier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = arguments(s)?;
        let values = args
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|_| ParseError::Number(part.to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match values[..] {
            [x1, y1, x2, y2] => Ok(CubicBezier::new(x1, y1, x2, y2)?),
            _ => Err(ParseError::Arity(values.len())),
        }
    }
}

impl Serialize for CubicBezier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.control_points().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CubicBezier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};

        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = CubicBezier;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "object {{x1, y1, x2, y2}}, array of 4 numbers or string \"cubic-bezier(x1, y1, x2, y2)\""
                )
            }

            fn visit_map<A>(self, mut map: A) -> Result<CubicBezier, A::Error>
            where
                A: MapAccess<'de>,
            {
                let (mut x1, mut y1, mut x2, mut y2) = (None, None, None, None);
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "x1" => x1 = Some(map.next_value()?),
                        "y1" => y1 = Some(map.next_value()?),
                        "x2" => x2 = Some(map.next_value()?),
                        "y2" => y2 = Some(map.next_value()?),
                        _ => {
                            let _: IgnoredAny = map.next_value()?;
                        }
                    }
                }
                CubicBezier::new(
                    x1.ok_or_else(|| A::Error::missing_field("x1"))?,
                    y1.ok_or_else(|| A::Error::missing_field("y1"))?,
                    x2.ok_or_else(|| A::Error::missing_field("x2"))?,
                    y2.ok_or_else(|| A::Error::missing_field("y2"))?,
                )
                .map_err(DeError::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CubicBezier, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = [0.0f64; 4];
                for (i, slot) in values.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(A::Error::invalid_length(5, &self));
                }
                let [x1, y1, x2, y2] = values;
                CubicBezier::new(x1, y1, x2, y2).map_err(DeError::custom)
            }

            fn visit_str<E>(self, s: &str) -> Result<CubicBezier, E>
            where
                E: DeError,
            {
                s.parse().map_err(DeError::custom)
            }
        }

        deserializer.deserialize_any(V)
    }
}
