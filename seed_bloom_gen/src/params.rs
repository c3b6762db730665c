// Inputs to one generation call.
//
// `GenerationParameters` is built once per request and never mutated while a
// composition is generated. Range checks are the caller's job (see
// `validate()`); the pipeline assumes they have passed.

use crate::error::BloomError;
use crate::prng::hash_text_seed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generation seed: either an integer used as-is, or text folded into an
/// integer with the stream's polynomial hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Int(i64),
    Text(String),
}

impl Seed {
    /// The integer that seeds the stream and selects the palette.
    pub fn to_int(&self) -> i64 {
        match self {
            Seed::Int(n) => *n,
            Seed::Text(s) => i64::from(hash_text_seed(s)),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Int(n) => write!(f, "{n}"),
            Seed::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Seed::Int(n)
    }
}

/// Everything one composition depends on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub seed: Seed,
    /// Growth/maturity in `[0, 1]`: longer branches and bigger flowers.
    pub bloom: f64,
    /// Requested flowers. Values `<= 0` produce no branches and no flowers.
    /// Below 3 the pairwise builder is used; from 3 the cluster builder.
    pub flower_count: i32,
    /// Petals on every flower.
    pub petal_count: u32,
    /// Per-flower colors, cycled by flower index.
    pub flower_colors: Option<Vec<String>>,
    /// Single color used when no list is given.
    pub flower_color: Option<String>,
    pub background_color: Option<String>,
    /// Length of the accompanying message; only biases the display style.
    pub message_length: usize,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            seed: Seed::from("blooming-42"),
            bloom: 0.6,
            flower_count: 5,
            petal_count: 5,
            flower_colors: None,
            flower_color: None,
            background_color: None,
            message_length: 0,
        }
    }
}

impl GenerationParameters {
    pub fn new(seed: impl Into<Seed>, bloom: f64) -> Self {
        Self {
            seed: seed.into(),
            bloom,
            ..Self::default()
        }
    }

    /// Check the preconditions the pipeline relies on.
    ///
    /// Non-positive flower counts are not errors: they mean "no flowers".
    pub fn validate(&self) -> Result<(), BloomError> {
        if !self.bloom.is_finite() || !(0.0..=1.0).contains(&self.bloom) {
            return Err(BloomError::InvalidBloom(self.bloom));
        }
        if self.petal_count == 0 {
            return Err(BloomError::InvalidPetalCount(self.petal_count));
        }
        let explicit = self
            .flower_colors
            .iter()
            .flatten()
            .chain(self.flower_color.iter())
            .chain(self.background_color.iter());
        for color in explicit {
            if color.trim().is_empty() {
                return Err(BloomError::EmptyColor);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_seed_folds_to_hash() {
        assert_eq!(Seed::from("blooming-42").to_int(), 2_722_655_244);
        assert_eq!(Seed::from(-12).to_int(), -12);
    }

    #[test]
    fn seed_display_is_raw_value() {
        assert_eq!(Seed::from("rose").to_string(), "rose");
        assert_eq!(Seed::from(7).to_string(), "7");
    }

    #[test]
    fn seed_deserializes_untagged() {
        let n: Seed = serde_json::from_str("42").unwrap();
        let s: Seed = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(n, Seed::Int(42));
        assert_eq!(s, Seed::Text("42".into()));
    }

    #[test]
    fn defaults_validate() {
        assert!(GenerationParameters::default().validate().is_ok());
    }

    #[test]
    fn bloom_out_of_range_is_rejected() {
        for bloom in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let params = GenerationParameters::new("x", bloom);
            assert!(matches!(
                params.validate(),
                Err(BloomError::InvalidBloom(_))
            ));
        }
    }

    #[test]
    fn zero_petals_is_rejected() {
        let params = GenerationParameters {
            petal_count: 0,
            ..GenerationParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(BloomError::InvalidPetalCount(0))
        ));
    }

    #[test]
    fn non_positive_flower_count_is_valid() {
        let params = GenerationParameters {
            flower_count: -3,
            ..GenerationParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn blank_color_is_rejected() {
        let params = GenerationParameters {
            flower_colors: Some(vec!["#fff".into(), " ".into()]),
            ..GenerationParameters::default()
        };
        assert!(matches!(params.validate(), Err(BloomError::EmptyColor)));
    }
}
