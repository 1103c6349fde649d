//! Helpers for the events attached to transaction results.
//!
//! Comet RPC responses from older nodes carry base64 encoded attribute keys
//! and values while the CLI prints them in plain text; both are accepted.

use std::collections::BTreeMap;

use base64::prelude::*;

/// An ABCI event.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Event {
    /// Event type, e.g. `tx` or `ethereum_tx`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Attributes in emission order.
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

/// A single event attribute. Either side may be null on the wire.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct EventAttribute {
    /// Attribute key
    pub key: Option<String>,
    /// Attribute value
    pub value: Option<String>,
}

impl EventAttribute {
    /// Builds a plain text attribute.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Attributes grouped by event type, later events overwriting earlier keys.
pub type DecodedEvents = BTreeMap<String, BTreeMap<String, Option<String>>>;

/// Decodes `raw` as base64 text, falling back to `raw` itself when it is
/// not valid base64 or does not decode to UTF-8.
#[must_use]
pub fn decode_base64(raw: &str) -> String {
    BASE64_STANDARD
        .decode(raw)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// Groups RPC events by type, decoding keys and values. Attributes without
/// a key are skipped; a missing value is kept as `None`.
#[must_use]
pub fn decode_events(events: &[Event]) -> DecodedEvents {
    let mut result = DecodedEvents::new();
    for event in events {
        let attrs = result.entry(event.ty.clone()).or_default();
        for attr in &event.attributes {
            let Some(key) = &attr.key else {
                continue;
            };
            attrs.insert(decode_base64(key), attr.value.as_deref().map(decode_base64));
        }
    }
    result
}

/// Returns the attributes of the first event of type `ty` that satisfies
/// `predicate`. Missing values read as empty strings.
pub fn find_event_attrs<P>(
    events: &[Event],
    ty: &str,
    predicate: P,
) -> Option<BTreeMap<String, String>>
where
    P: Fn(&BTreeMap<String, String>) -> bool,
{
    events
        .iter()
        .filter(|event| event.ty == ty)
        .map(|event| {
            event
                .attributes
                .iter()
                .filter_map(|attr| {
                    attr.key
                        .clone()
                        .map(|key| (key, attr.value.clone().unwrap_or_default()))
                })
                .collect()
        })
        .find(|attrs| predicate(attrs))
}

/// Detects a repeated `<first value>:<amount>` pair in a flat attribute list.
///
/// The key of the first attribute marks the start of each record, and the
/// record's `amount` attribute completes the pair. Used to assert that a
/// transfer or fee event was not emitted twice.
#[must_use]
pub fn find_duplicate(attributes: &[EventAttribute]) -> Option<String> {
    let marker = attributes.first()?.key.as_deref();
    let mut seen = std::collections::HashSet::new();
    let mut current = None;

    for attr in attributes {
        if attr.key.as_deref() == marker {
            current = attr.value.as_deref();
        } else if attr.key.as_deref() == Some("amount") {
            let pair = format!(
                "{}:{}",
                current.unwrap_or_default(),
                attr.value.as_deref().unwrap_or_default()
            );
            if !seen.insert(pair.clone()) {
                return Some(pair);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tx_events() -> Vec<Event> {
        serde_json::from_value(json!([
            {
                "type": "tx",
                "attributes": [
                    { "key": "fee", "value": "2000000000000000atest" },
                    { "key": "fee_payer", "value": "cosmos1qqqq" }
                ]
            },
            {
                "type": "tx",
                "attributes": [{ "key": "acc_seq", "value": "cosmos1qqqq/3" }]
            },
            {
                "type": "message",
                "attributes": [{ "key": "action", "value": "/cosmos.bank.v1beta1.MsgSend" }]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn decodes_base64_and_plain_attributes() {
        let events = vec![Event {
            ty: "ethereum_tx".to_string(),
            attributes: vec![
                // "ethereumTxHash" / "0xabc"
                EventAttribute::new("ZXRoZXJldW1UeEhhc2g=", "MHhhYmM="),
                EventAttribute::new("txIndex", "0"),
                EventAttribute {
                    key: None,
                    value: Some("ignored".to_string()),
                },
                EventAttribute {
                    key: Some("recipient".to_string()),
                    value: None,
                },
            ],
        }];

        let decoded = decode_events(&events);
        let attrs = &decoded["ethereum_tx"];
        assert_eq!(attrs["ethereumTxHash"].as_deref(), Some("0xabc"));
        assert_eq!(attrs["txIndex"].as_deref(), Some("0"));
        assert_eq!(attrs["recipient"], None);
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn decode_base64_falls_back_to_raw() {
        assert_eq!(decode_base64("YW1vdW50"), "amount");
        assert_eq!(decode_base64("atest"), "atest");
        // valid base64, but not UTF-8 once decoded
        assert_eq!(decode_base64("/w=="), "/w==");
    }

    #[test]
    fn finds_first_matching_event() {
        let events = tx_events();
        let attrs = find_event_attrs(&events, "tx", |attrs| attrs.contains_key("fee")).unwrap();
        assert_eq!(attrs["fee"], "2000000000000000atest");

        let attrs = find_event_attrs(&events, "tx", |attrs| attrs.contains_key("acc_seq")).unwrap();
        assert_eq!(attrs["acc_seq"], "cosmos1qqqq/3");

        assert!(find_event_attrs(&events, "tx", |attrs| attrs.contains_key("signature")).is_none());
        assert!(find_event_attrs(&events, "transfer", |_| true).is_none());
    }

    #[test]
    fn detects_duplicate_transfers() {
        let unique = [
            EventAttribute::new("spender", "cosmos1a"),
            EventAttribute::new("amount", "10atest"),
            EventAttribute::new("spender", "cosmos1b"),
            EventAttribute::new("amount", "10atest"),
        ];
        assert_eq!(find_duplicate(&unique), None);

        let duplicated = [
            EventAttribute::new("spender", "cosmos1a"),
            EventAttribute::new("amount", "10atest"),
            EventAttribute::new("spender", "cosmos1a"),
            EventAttribute::new("amount", "10atest"),
        ];
        assert_eq!(find_duplicate(&duplicated).as_deref(), Some("cosmos1a:10atest"));
        assert_eq!(find_duplicate(&[]), None);
    }
}
