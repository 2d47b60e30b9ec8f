//! Small validated text types shared across the phenopackets crates.
//!
//! Record fields keep the text the producer wrote. The codec checks `Age` durations with
//! [`Iso8601Duration::parse`] when decoding; `OntologyClass.id` is never checked, and
//! [`Curie`] is for callers that want to interpret it.

use std::fmt;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,

    /// The input is not of the form `prefix:local_id`.
    #[error("'{0}' is not a CURIE (expected 'PREFIX:local_id')")]
    NotCurie(String),

    /// The input is not an ISO 8601 duration.
    #[error("'{0}' is not an ISO 8601 duration")]
    NotDuration(String),
}

/// A compact URI of the form `prefix:local_id`, such as `HP:0012828`.
///
/// The prefix must be non-empty and must not contain whitespace. The local part may be empty
/// (some vocabularies use the bare prefix to name the whole namespace), but the colon is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curie {
    text: String,
    split: usize,
}

impl Curie {
    /// Parses a CURIE.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] for blank input and [`TextError::NotCurie`] when there is no
    /// colon, the prefix is empty, or the text contains whitespace.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(TextError::Empty);
        }

        let split = match input.find(':') {
            Some(0) | None => return Err(TextError::NotCurie(input.to_owned())),
            Some(split) => split,
        };

        if input.chars().any(char::is_whitespace) {
            return Err(TextError::NotCurie(input.to_owned()));
        }

        Ok(Self {
            text: input.to_owned(),
            split,
        })
    }

    /// The namespace prefix, e.g. `HP`.
    pub fn prefix(&self) -> &str {
        &self.text[..self.split]
    }

    /// The identifier within the namespace, e.g. `0012828`.
    pub fn local_id(&self) -> &str {
        &self.text[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Curie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Curie {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl serde::Serialize for Curie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> serde::Deserialize<'de> for Curie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Curie::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A syntactically valid ISO 8601 duration such as `P14Y`, `P3Y2M`, `P10W` or `PT36H`.
///
/// Only the syntax is checked: designators must appear in order (`Y M W D` then `T H M S`), each
/// at most once, at least one component must be present, and only the last component may carry a
/// decimal fraction. Semantic checks (e.g. "is this age plausible") are left to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iso8601Duration(String);

impl Iso8601Duration {
    /// Parses a duration.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] for blank input and [`TextError::NotDuration`] otherwise.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(TextError::Empty);
        }
        if !is_duration(input) {
            return Err(TextError::NotDuration(input.to_owned()));
        }
        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iso8601Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_duration(input: &str) -> bool {
    const DATE_DESIGNATORS: &[u8] = b"YMWD";
    const TIME_DESIGNATORS: &[u8] = b"HMS";

    let Some(rest) = input.strip_prefix('P') else {
        return false;
    };
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => {
            if time.is_empty() {
                return false;
            }
            (date, Some(time))
        }
        None => (rest, None),
    };

    let mut components = 0usize;
    let mut fractional_seen = false;
    for (part, designators) in [(Some(date), DATE_DESIGNATORS), (time, TIME_DESIGNATORS)] {
        let Some(part) = part else { continue };
        let mut next_allowed = 0usize;
        let mut number = String::new();
        for c in part.chars() {
            if c.is_ascii_digit() || c == '.' || c == ',' {
                if fractional_seen {
                    return false;
                }
                number.push(c);
                continue;
            }
            let Some(position) = designators[next_allowed..]
                .iter()
                .position(|d| *d as char == c)
            else {
                return false;
            };
            if !is_component_number(&number) {
                return false;
            }
            if number.contains(&['.', ','][..]) {
                fractional_seen = true;
            }
            next_allowed += position + 1;
            components += 1;
            number.clear();
        }
        if !number.is_empty() {
            return false;
        }
    }

    components > 0
}

fn is_component_number(number: &str) -> bool {
    let mut parts = number.splitn(2, &['.', ','][..]);
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match fraction {
        Some(fraction) => !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curie_splits_prefix_and_local_id() {
        let curie = Curie::parse("HP:0012828").expect("valid curie");
        assert_eq!(curie.prefix(), "HP");
        assert_eq!(curie.local_id(), "0012828");
        assert_eq!(curie.to_string(), "HP:0012828");
    }

    #[test]
    fn curie_keeps_colons_in_local_part() {
        let curie = Curie::parse("ensembl:ENSG00000141510:1").expect("valid curie");
        assert_eq!(curie.prefix(), "ensembl");
        assert_eq!(curie.local_id(), "ENSG00000141510:1");
    }

    #[test]
    fn curie_rejects_malformed_input() {
        assert_eq!(Curie::parse("   "), Err(TextError::Empty));
        assert!(matches!(Curie::parse("HP0012828"), Err(TextError::NotCurie(_))));
        assert!(matches!(Curie::parse(":0012828"), Err(TextError::NotCurie(_))));
        assert!(matches!(Curie::parse("HP: 0012828"), Err(TextError::NotCurie(_))));
    }

    #[test]
    fn curie_deserializes_with_validation() {
        let ok: Curie = serde_json::from_str("\"MONDO:0007254\"").expect("valid");
        assert_eq!(ok.prefix(), "MONDO");

        let err = serde_json::from_str::<Curie>("\"not a curie\"");
        assert!(err.is_err());
    }

    #[test]
    fn accepts_common_durations() {
        for text in ["P14Y", "P3Y2M", "P10W", "P1Y2M3D", "PT36H", "P1DT12H30M", "PT0.5S", "P0D"] {
            assert!(Iso8601Duration::parse(text).is_ok(), "{text} should parse");
        }
    }

    #[test]
    fn rejects_malformed_durations() {
        for text in ["14Y", "P", "PT", "PY", "P2M3Y", "P1.5Y2M", "P1YY", "P1Y T2H", "P-1Y"] {
            assert!(
                matches!(Iso8601Duration::parse(text), Err(TextError::NotDuration(_))),
                "{text} should be rejected"
            );
        }
        assert_eq!(Iso8601Duration::parse(""), Err(TextError::Empty));
    }
}
