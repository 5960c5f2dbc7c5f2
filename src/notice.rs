//! Purpose: Define a stable, structured schema for non-fatal diagnostics.
//! Exports: `Notice`, `notice_json`.
//! Role: Shared contract for events a helper wants surfaced without failing.
//! Invariants: Notices are non-fatal and never travel inside `Error`.
//! Invariants: JSON schema is stable once published; fields are additive-only.
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: String,
    pub message: String,
    pub details: Map<String, Value>,
}

impl Notice {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            kind: kind.into(),
            message: message.into(),
            details: Map::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }
}

pub fn notice_json(notice: &Notice) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(notice.kind));
    inner.insert("message".to_string(), json!(notice.message));
    inner.insert("details".to_string(), Value::Object(notice.details.clone()));

    let mut outer = Map::new();
    outer.insert("notice".to_string(), Value::Object(inner));
    Value::Object(outer)
}
