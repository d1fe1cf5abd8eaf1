//! Mixed number/string token values

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest integer an `f64` represents exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A single theme scale entry: a bare number or a unit-suffixed string
///
/// Letter spacings and radii mix both (`0` next to `"-0.04em"`), so every
/// scale uses this type. Values order strings first, lexicographically,
/// then numbers ascending. `-0` is stored as `0`.
#[derive(Clone, Debug)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    pub fn number(n: f64) -> Self {
        // collapse -0.0 so it dedups against 0.0
        Self::Number(if n == 0.0 { 0.0 } else { n })
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl Ord for TokenValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for TokenValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TokenValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TokenValue {}

impl Hash for TokenValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(n) => {
                0u8.hash(state);
                n.to_bits().hash(state);
            }
            Self::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        Self::number(n)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // whole numbers go out as JSON integers: `400`, not `400.0`
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::number(n),
            Raw::Text(s) => Self::Text(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_sort_before_numbers() {
        let mut values = vec![
            TokenValue::number(4.0),
            TokenValue::text("12px 4px 12px 4px"),
            TokenValue::number(2.0),
            TokenValue::text("-0.04em"),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                TokenValue::text("-0.04em"),
                TokenValue::text("12px 4px 12px 4px"),
                TokenValue::number(2.0),
                TokenValue::number(4.0),
            ]
        );
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let mut values: Vec<TokenValue> = [72.0, 12.0, 14.0].into_iter().map(Into::into).collect();
        values.sort();
        let sorted: Vec<f64> = values.iter().filter_map(TokenValue::as_f64).collect();
        assert_eq!(sorted, vec![12.0, 14.0, 72.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenValue::number(400.0).to_string(), "400");
        assert_eq!(TokenValue::number(1.2).to_string(), "1.2");
        assert_eq!(TokenValue::text("-0.04em").to_string(), "-0.04em");
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(TokenValue::number(-0.0), TokenValue::number(0.0));
    }

    #[test]
    fn test_serializes_whole_numbers_as_integers() {
        let values = vec![
            TokenValue::number(400.0),
            TokenValue::number(1.2),
            TokenValue::text("4px"),
        ];
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"[400,1.2,"4px"]"#
        );
    }

    #[test]
    fn test_deserializes_mixed_values() {
        let values: Vec<TokenValue> = serde_json::from_str(r#"["-0.04em", 0]"#).unwrap();
        assert_eq!(values, vec![TokenValue::text("-0.04em"), TokenValue::number(0.0)]);
    }
}
