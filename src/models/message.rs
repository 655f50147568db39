//! Inbound control messages from the game transport.
//!
//! Messages are JSON objects naming their intent in `action` or `type`
//! (interchangeable, `action` wins). Unknown intents decode to `None`
//! and are dropped without side effects.

use serde_json::Value;
use thiserror::Error;

use super::PlantSnapshot;

pub const SHOW_ACTION: &str = "showPlantStatus";
pub const UPDATE_ACTION: &str = "updatePlantStatus";
pub const HIDE_ACTION: &str = "hidePlantStatus";

/// A decoded control message.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlMessage {
    Show(PlantSnapshot),
    Update(PlantSnapshot),
    Hide,
}

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl ControlMessage {
    /// Decode one transport line.
    ///
    /// `Ok(None)` means the line was well-formed but carries nothing this
    /// widget acts on (unknown action, or a show/update with no plant data).
    pub fn parse(line: &str) -> Result<Option<Self>, MessageError> {
        let value: Value = serde_json::from_str(line)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Option<Self>, MessageError> {
        let obj = value
            .as_object()
            .ok_or_else(|| MessageError::NotAnObject(kind_name(value)))?;

        // `type` is only consulted when `action` is unset or falsy
        let action = match obj.get("action") {
            Some(v) if !is_falsy(v) => Some(v),
            _ => obj.get("type"),
        }
        .and_then(Value::as_str);

        let msg = match action {
            Some(SHOW_ACTION) => plant_data(obj).map(ControlMessage::Show),
            Some(UPDATE_ACTION) => plant_data(obj).map(ControlMessage::Update),
            Some(HIDE_ACTION) => Some(ControlMessage::Hide),
            _ => None,
        };
        Ok(msg)
    }

    pub fn action_name(&self) -> &'static str {
        match self {
            ControlMessage::Show(_) => SHOW_ACTION,
            ControlMessage::Update(_) => UPDATE_ACTION,
            ControlMessage::Hide => HIDE_ACTION,
        }
    }
}

/// `plantData` payload; missing, null or undecodable payloads yield `None`.
fn plant_data(obj: &serde_json::Map<String, Value>) -> Option<PlantSnapshot> {
    let raw = obj.get("plantData").filter(|v| v.is_object())?;
    match serde_json::from_value(raw.clone()) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("Dropping malformed plantData: {}", e);
            None
        }
    }
}

/// JSON values a loosely typed sender treats as "not set".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
