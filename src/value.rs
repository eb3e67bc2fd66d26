//! Logical topic values and the domains that constrain them.

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// The decoded (or about-to-be-encoded) value of a topic.
///
/// Most topics decode to an integer enum index or a signed magnitude;
/// a handful (pump flow, pressures, currents) carry a fractional part;
/// `Status/Error` and `Model/Name` decode to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
            Value::Text(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }
}

/// A value offered by an external caller through `command()`: either a
/// bare number, or a label to be resolved against an `enum` domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Number(f64),
    Label(String),
}

impl Input {
    fn as_number(&self) -> Option<f64> {
        match self {
            Input::Number(n) => Some(*n),
            Input::Label(s) => s.parse::<f64>().ok(),
        }
    }
}

/// The value domain a topic's decoded/encoded quantity must stay within.
#[derive(Debug, Clone)]
pub enum Domain {
    /// No constraint; any decoded value is accepted (e.g. free-form text).
    Any,
    /// An inclusive numeric range over the decoded (post-scaling) value.
    Range { min: f64, max: f64 },
    /// An ordered set of labels; the logical value is the index into it.
    Enum(&'static [&'static str]),
}

impl Domain {
    /// §4.3 `accepts(v)`. A domain without an `enum` always accepts —
    /// `min`/`max` are informational (used by `describe`/docs) and never
    /// actually gate a write, matching the source's `accepts`, which
    /// returns early whenever `enum` is absent and never reaches its own
    /// area check.
    pub fn accepts(&self, input: &Input) -> bool {
        match self {
            Domain::Any => true,
            Domain::Range { .. } => true,
            Domain::Enum(labels) => match input {
                Input::Number(n) => *n >= 0.0 && (*n as usize) < labels.len(),
                Input::Label(s) => labels.iter().any(|l| l.eq_ignore_ascii_case(s)),
            },
        }
    }

    /// §4.3 `parse(v)`: resolves an `Input` into the concrete `Value`
    /// the encoder should receive. Callers must check `accepts` first;
    /// this returns `CommandError::OutOfDomain` defensively otherwise.
    pub fn parse(&self, input: &Input) -> Result<Value, CommandError> {
        if !self.accepts(input) {
            return Err(CommandError::OutOfDomain);
        }
        match self {
            Domain::Any => match input {
                Input::Number(n) => Ok(Value::Float(*n)),
                Input::Label(s) => Ok(Value::Text(s.clone())),
            },
            Domain::Range { .. } => input.as_number().map(Value::Float).ok_or(CommandError::OutOfDomain),
            Domain::Enum(labels) => match input {
                Input::Number(n) => Ok(Value::Int(*n as i64)),
                Input::Label(s) => {
                    let idx = labels
                        .iter()
                        .position(|l| l.eq_ignore_ascii_case(s))
                        .ok_or(CommandError::OutOfDomain)?;
                    Ok(Value::Int(idx as i64))
                }
            },
        }
    }

    /// Human-readable rendering of a decoded value against this domain:
    /// the enum label when present, else the bare number.
    pub fn describe(&self, value: &Value) -> String {
        match (self, value) {
            (Domain::Enum(labels), Value::Int(idx)) if *idx >= 0 && (*idx as usize) < labels.len() => {
                labels[*idx as usize].to_string()
            }
            (_, Value::Int(v)) => v.to_string(),
            (_, Value::Float(v)) => v.to_string(),
            (_, Value::Text(s)) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_domain_bounds_are_informational_only() {
        let domain = Domain::Range { min: -5.0, max: 20.0 };
        assert!(domain.accepts(&Input::Number(0.0)));
        assert!(domain.accepts(&Input::Number(21.0)));
        assert!(domain.accepts(&Input::Number(-6.0)));
        assert_eq!(domain.parse(&Input::Number(21.0)).unwrap(), Value::Float(21.0));
    }

    #[test]
    fn range_domain_rejects_unparseable_label_without_panicking() {
        let domain = Domain::Range { min: -5.0, max: 20.0 };
        assert!(domain.accepts(&Input::Label("nonsense".into())));
        assert_eq!(domain.parse(&Input::Label("nonsense".into())), Err(CommandError::OutOfDomain));
    }

    #[test]
    fn enum_domain_accepts_index_or_label() {
        let domain = Domain::Enum(&["Off", "On"]);
        assert!(domain.accepts(&Input::Number(1.0)));
        assert!(!domain.accepts(&Input::Number(2.0)));
        assert!(domain.accepts(&Input::Label("on".into())));
        assert!(!domain.accepts(&Input::Label("Maybe".into())));
    }

    #[test]
    fn enum_domain_parses_label_case_insensitively() {
        let domain = Domain::Enum(&["Heat", "Cool", "DHW"]);
        let parsed = domain.parse(&Input::Label("dhw".into())).unwrap();
        assert_eq!(parsed, Value::Int(2));
    }

    #[test]
    fn any_domain_rejects_nothing() {
        let domain = Domain::Any;
        assert!(domain.accepts(&Input::Label("anything".into())));
    }
}
