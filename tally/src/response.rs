use crate::{Operator, Postfix, TallyResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Request document accepted by the HTTP API
///
/// A missing or `null` expression reads as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalcRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expression: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CalcRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Response document returned by the HTTP API
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalcResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl CalcResponse {
    pub fn success(value: f64) -> Self {
        Self {
            result: Some(format_result(value)),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }

    /// Build the response for an evaluation outcome. Errors are reduced to
    /// the public message of their class.
    pub fn from_outcome(outcome: &TallyResult<f64>) -> Self {
        match outcome {
            Ok(value) => Self::success(*value),
            Err(e) => Self::failure(e.class().public_message()),
        }
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(_) => r#"{"error":"Internal server error"}"#.to_string(),
        }
    }
}

/// Render a result in fixed notation with six fractional digits, the same
/// way C's and Go's `%f` do.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// Result of a traced evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub value: f64,
    pub postfix: Postfix,
    pub steps: Vec<Step>,
}

/// One token consumed by the evaluator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub token: String,
    #[serde(flatten)]
    pub action: StepAction,
    /// Operand stack after the step, bottom first
    pub stack: Vec<f64>,
}

/// What the evaluator did with a token
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepAction {
    Push {
        value: f64,
    },
    Apply {
        operator: Operator,
        left: f64,
        right: f64,
        result: f64,
    },
}
