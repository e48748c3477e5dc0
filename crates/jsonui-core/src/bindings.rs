//! Typed builders for the opaque control values.
//!
//! Conditions and action bindings belong to the renderer's grammar; these
//! helpers only produce JSON in the expected shape and are never read back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{"$state": path}`, a reference to a value in renderer state.
pub fn state_ref(path: impl Into<String>) -> Value {
    let mut map = Map::new();
    map.insert("$state".to_string(), Value::String(path.into()));
    Value::Object(map)
}

/// A named action with optional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBinding {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl ActionBinding {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: None,
        }
    }

    /// Replace the parameters wholesale.
    pub fn with_params(mut self, params: impl Into<Value>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Add one named parameter. Non-object params are replaced.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = match self.params.take() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        map.insert(name.into(), value.into());
        self.params = Some(Value::Object(map));
        self
    }
}

impl From<ActionBinding> for Value {
    fn from(binding: ActionBinding) -> Self {
        let mut map = Map::new();
        map.insert("action".to_string(), Value::String(binding.action));
        if let Some(params) = binding.params {
            map.insert("params".to_string(), params);
        }
        Value::Object(map)
    }
}

/// List repetition over an array in state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatSpec {
    #[serde(rename = "statePath")]
    pub state_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl RepeatSpec {
    pub fn new(state_path: impl Into<String>) -> Self {
        Self {
            state_path: state_path.into(),
            key: None,
        }
    }

    pub fn keyed_by(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl From<RepeatSpec> for Value {
    fn from(repeat: RepeatSpec) -> Self {
        let mut map = Map::new();
        map.insert("statePath".to_string(), Value::String(repeat.state_path));
        if let Some(key) = repeat.key {
            map.insert("key".to_string(), Value::String(key));
        }
        Value::Object(map)
    }
}

/// Event names (for `on`) or state paths (for `watch`) mapped to the
/// actions they trigger.
///
/// One action serializes as a bare object, several as an array in the
/// order they were bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: IndexMap<String, Vec<ActionBinding>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, trigger: impl Into<String>, binding: ActionBinding) -> Self {
        self.entries.entry(trigger.into()).or_default().push(binding);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Bindings> for Value {
    fn from(bindings: Bindings) -> Self {
        let map = bindings
            .entries
            .into_iter()
            .map(|(trigger, mut actions)| {
                let value = if actions.len() == 1 {
                    Value::from(actions.remove(0))
                } else {
                    Value::Array(actions.into_iter().map(Value::from).collect())
                };
                (trigger, value)
            })
            .collect::<Map<String, Value>>();
        Value::Object(map)
    }
}
