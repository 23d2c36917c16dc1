//! Signal snapshot payload fetched by the dashboard.
//!
//! A snapshot is a JSON document with a display timestamp and a mapping of
//! symbol to signal attributes. Every attribute is display-only: any JSON scalar
//! is accepted and kept exactly as the producer wrote it, and missing attributes
//! stay `None` so they render as blank cells. Only `last_price` must be a number.
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::DashboardError;

/// One fetched signal document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignalSnapshot {
    /// Producer timestamp, shown as-is.
    pub timestamp: String,
    /// Signals keyed by symbol, in document order.
    #[serde(deserialize_with = "ordered_signals")]
    pub signals: Vec<(String, SignalEntry)>,
}

impl SignalSnapshot {
    /// Parses a snapshot from a raw JSON body.
    pub fn from_slice(body: &[u8]) -> Result<Self, DashboardError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Signal attributes for a single symbol.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignalEntry {
    /// Trend classification (e.g. `up`, `BULLISH`).
    #[serde(default, deserialize_with = "any_cell")]
    pub trend: Option<CellValue>,
    /// Signal magnitude, usually a number or a label.
    #[serde(default, deserialize_with = "any_cell")]
    pub strength: Option<CellValue>,
    /// Volume spike classification.
    #[serde(default, deserialize_with = "any_cell")]
    pub volume_spike: Option<CellValue>,
    /// Reversal classification.
    #[serde(default, deserialize_with = "any_cell")]
    pub reversal_signal: Option<CellValue>,
    /// Premium/discount classification.
    #[serde(default, deserialize_with = "any_cell")]
    pub premium_discount: Option<CellValue>,
    /// Last traded price.
    #[serde(default, deserialize_with = "number_cell")]
    pub last_price: Option<CellValue>,
}

/// A display-only attribute value.
///
/// Numbers and nested JSON keep their source text, so `1e3` is shown as `1e3`
/// and `42000.50` keeps its trailing zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// JSON string, unescaped.
    Text(String),
    /// JSON number, source text.
    Number(String),
    /// JSON boolean.
    Bool(bool),
    /// JSON object or array, source text.
    Json(String),
}

impl CellValue {
    fn from_raw(raw: &RawValue) -> Result<Self, serde_json::Error> {
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'"') => serde_json::from_str(text).map(CellValue::Text),
            Some(b't' | b'f') => serde_json::from_str(text).map(CellValue::Bool),
            Some(b'-' | b'0'..=b'9') => Ok(CellValue::Number(text.to_string())),
            _ => Ok(CellValue::Json(text.to_string())),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Number(s) | CellValue::Json(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn any_cell<'de, D>(deserializer: D) -> Result<Option<CellValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Box<RawValue>>::deserialize(deserializer)?;
    raw.map(|raw| CellValue::from_raw(&raw).map_err(de::Error::custom))
        .transpose()
}

fn number_cell<'de, D>(deserializer: D) -> Result<Option<CellValue>, D::Error>
where
    D: Deserializer<'de>,
{
    match any_cell(deserializer)? {
        Some(CellValue::Number(n)) => Ok(Some(CellValue::Number(n))),
        Some(other) => Err(de::Error::custom(format!("expected a number, found {}", other))),
        None => Ok(None),
    }
}

/// Collects the `signals` object into a `Vec`, keeping key order and any
/// repeated keys exactly as the producer wrote them.
fn ordered_signals<'de, D>(deserializer: D) -> Result<Vec<(String, SignalEntry)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedSignals;

    impl<'de> Visitor<'de> for OrderedSignals {
        type Value = Vec<(String, SignalEntry)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping symbols to signal entries")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut signals = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((symbol, entry)) = map.next_entry::<String, SignalEntry>()? {
                signals.push((symbol, entry));
            }
            Ok(signals)
        }
    }

    deserializer.deserialize_map(OrderedSignals)
}
