//! Histogram Payload Module
//! The per-channel sample arrays carried by the page as a JSON attribute.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a payload could not be turned into [`HistogramData`].
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("attribute `{attribute}` is missing on element `{element}`")]
    MissingAttribute { element: String, attribute: String },
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Color channel of an RGB histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Render order of the channels.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Key of the channel inside the JSON payload.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Trace name shown by the charting backend.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// CSS color name used for the trace marker.
    pub fn css_color(self) -> &'static str {
        self.key()
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Channel::Red => [255, 0, 0],
            Channel::Green => [0, 128, 0],
            Channel::Blue => [0, 0, 255],
        }
    }

    /// Index of the channel inside an RGB pixel.
    pub fn pixel_index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Decoded histogram payload.
///
/// Channel values are kept as raw JSON so whatever the producer wrote reaches
/// the chart untouched: no length reconciliation, no numeric checks. A missing
/// key is `None`; an explicit `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistogramData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<Value>,
}

impl HistogramData {
    /// Decode the attribute string of the data-source element.
    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(raw)?;
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(PayloadError::NotAnObject(json_kind(&other))),
        };

        Ok(Self {
            red: take_channel(&mut map, Channel::Red),
            green: take_channel(&mut map, Channel::Green),
            blue: take_channel(&mut map, Channel::Blue),
        })
    }

    /// Encode back into the attribute representation.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn channel(&self, channel: Channel) -> Option<&Value> {
        match channel {
            Channel::Red => self.red.as_ref(),
            Channel::Green => self.green.as_ref(),
            Channel::Blue => self.blue.as_ref(),
        }
    }

    /// Build a payload from numeric samples, one vector per channel.
    pub fn from_samples(red: Vec<f64>, green: Vec<f64>, blue: Vec<f64>) -> Self {
        Self {
            red: Some(Value::from(red)),
            green: Some(Value::from(green)),
            blue: Some(Value::from(blue)),
        }
    }
}

fn take_channel(map: &mut Map<String, Value>, channel: Channel) -> Option<Value> {
    map.remove(channel.key())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_keeps_arrays_verbatim() {
        let data = HistogramData::decode(r#"{"red":[1],"green":[],"blue":[9,9]}"#).unwrap();
        assert_eq!(data.red, Some(json!([1])));
        assert_eq!(data.green, Some(json!([])));
        assert_eq!(data.blue, Some(json!([9, 9])));
    }

    #[test]
    fn decode_does_not_inspect_channel_contents() {
        let data = HistogramData::decode(r#"{"red":"oops","green":[1,"x",null],"extra":1}"#)
            .unwrap();
        assert_eq!(data.red, Some(json!("oops")));
        assert_eq!(data.green, Some(json!([1, "x", null])));
        assert_eq!(data.blue, None);
    }

    #[test]
    fn null_channel_is_forwarded() {
        let data = HistogramData::decode(r#"{"red":null}"#).unwrap();
        assert_eq!(data.red, Some(Value::Null));
        assert_eq!(data.green, None);
        assert_eq!(data.encode().unwrap(), r#"{"red":null}"#);
    }

    #[test]
    fn non_object_payloads_are_rejected() {
        for raw in ["[1,2,3]", "3", "null", "\"red\""] {
            let err = HistogramData::decode(raw).unwrap_err();
            assert!(matches!(err, PayloadError::NotAnObject(_)), "{raw}: {err}");
        }
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = HistogramData::decode("not json").unwrap_err();
        assert!(matches!(err, PayloadError::InvalidJson(_)));
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let samples = [
            HistogramData::default(),
            HistogramData::from_samples(vec![1.0, 2.5], vec![], vec![0.0; 4]),
            HistogramData {
                red: Some(Value::Null),
                green: None,
                blue: Some(json!([])),
            },
            HistogramData {
                red: None,
                green: Some(json!({"nested": true})),
                blue: Some(json!([1, 2])),
            },
        ];
        for data in samples {
            let raw = data.encode().unwrap();
            assert_eq!(HistogramData::decode(&raw).unwrap(), data);
        }
    }

    #[test]
    fn absent_channels_are_not_serialized() {
        let data = HistogramData {
            red: Some(json!([1])),
            ..Default::default()
        };
        assert_eq!(data.encode().unwrap(), r#"{"red":[1]}"#);
    }
}
