use serde::Serialize;
use serde_json::Value;

/// Identifier the lookup field starts with.
pub const DEFAULT_ORDER_ID: &str = "O00034";

/// Decoded body of the last successful `/health` fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HealthSnapshot(Value);

impl HealthSnapshot {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Decoded body of the last successful order lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordData(Value);

impl RecordData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// `(key, value)` rows in the order the server sent them.
    ///
    /// Objects yield one row per field and arrays one row per index.
    /// Scalars have no fields and yield nothing.
    pub fn rows(&self) -> Vec<(String, String)> {
        match &self.0 {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), stringify(value)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), stringify(value)))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Everything the rendering layer observes.
///
/// Health and lookup failures land in separate slots so one flow can never
/// overwrite or clear the other's message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub health: Option<HealthSnapshot>,
    pub health_error: Option<String>,
    pub order_id: String,
    pub order: Option<RecordData>,
    pub lookup_error: Option<String>,
    /// Bumped at the start of every lookup; a resolution only writes while
    /// its attempt is still the current one.
    #[serde(skip)]
    pub(crate) attempt: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_order_id(DEFAULT_ORDER_ID)
    }
}

impl ViewState {
    pub fn with_order_id(order_id: impl Into<String>) -> Self {
        Self {
            health: None,
            health_error: None,
            order_id: order_id.into(),
            order: None,
            lookup_error: None,
            attempt: 0,
        }
    }

    /// The single message to show, if any. A lookup failure takes
    /// precedence over a health failure.
    pub fn error(&self) -> Option<&str> {
        self.lookup_error
            .as_deref()
            .or(self.health_error.as_deref())
    }

    /// Number of lookup attempts started so far.
    pub fn attempts(&self) -> u64 {
        self.attempt
    }
}
