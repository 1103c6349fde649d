//! This module provides custom serde implementations.

/// Serialize a number as a string, and deserialize it from either a string or
/// a JSON integer.
///
/// The node prints most amounts and heights as strings but some parameters
/// as bare integers; both forms are accepted.
pub mod number_as_string {
    use std::{fmt::Display, str::FromStr};

    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Unsigned(u64),
    }

    /// Implements the serde `serialize` function for a number.
    /// # Errors
    /// Returns an error if the number cannot be serialized.
    pub fn serialize<T, S>(number: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ToString,
        S: Serializer,
    {
        serializer.serialize_str(&number.to_string())
    }

    /// Implements the serde `deserialize` function for a number.
    /// # Errors
    /// Returns an error if the value is neither an integer nor a string that
    /// parses to `T`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Unsigned(n) => n.to_string(),
        };
        s.trim().parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Sample {
        #[serde(with = "super::number_as_string")]
        height: u64,
    }

    #[test]
    fn accepts_strings_and_integers() {
        let from_str: Sample = serde_json::from_value(json!({ "height": " 42" })).unwrap();
        let from_int: Sample = serde_json::from_value(json!({ "height": 42 })).unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_str.height, 42);
    }

    #[test]
    fn serializes_as_strings() {
        let sample = Sample { height: 7 };
        assert_eq!(serde_json::to_value(&sample).unwrap(), json!({ "height": "7" }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_value::<Sample>(json!({ "height": "x" })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "height": -1 })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "height": true })).is_err());
    }
}
