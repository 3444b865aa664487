//! Unsharp formatter — sigma or parameter set → `{radius}x{sigma}+{gain}+{threshold}`.

use serde_json::Value;

use crate::args::value::{format_number, value_to_string};

const DEFAULT_SIGMA: &str = "2";
const DEFAULT_RADIUS: &str = "0";
const DEFAULT_GAIN: &str = "1";
const DEFAULT_THRESHOLD: &str = "0.05";

/// Argument of `-unsharp`: a parameter set whose missing fields take the
/// tool's usual defaults. Values are kept in rendered form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsharpSpec {
    pub sigma: Option<String>,
    pub radius: Option<String>,
    pub gain: Option<String>,
    pub threshold: Option<String>,
}

/// Anything accepted by the `unsharp` option.
pub type Unsharp = UnsharpSpec;

impl UnsharpSpec {
    pub fn sigma(sigma: impl Into<f64>) -> Self {
        Self {
            sigma: Some(format_number(sigma.into())),
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: impl Into<f64>) -> Self {
        self.radius = Some(format_number(radius.into()));
        self
    }

    pub fn with_gain(mut self, gain: impl Into<f64>) -> Self {
        self.gain = Some(format_number(gain.into()));
        self
    }

    pub fn with_threshold(mut self, threshold: impl Into<f64>) -> Self {
        self.threshold = Some(format_number(threshold.into()));
        self
    }

    /// Objects are a parameter set; any other value is the sigma.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                let text = |key: &str| map.get(key).map(value_to_string);
                Self {
                    sigma: text("sigma"),
                    radius: text("radius"),
                    gain: text("gain"),
                    threshold: text("threshold"),
                }
            }
            other => Self {
                sigma: Some(value_to_string(other)),
                ..Self::default()
            },
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{}x{}+{}+{}",
            self.radius.as_deref().unwrap_or(DEFAULT_RADIUS),
            self.sigma.as_deref().unwrap_or(DEFAULT_SIGMA),
            self.gain.as_deref().unwrap_or(DEFAULT_GAIN),
            self.threshold.as_deref().unwrap_or(DEFAULT_THRESHOLD),
        )
    }
}

impl From<f64> for UnsharpSpec {
    fn from(sigma: f64) -> Self {
        UnsharpSpec::sigma(sigma)
    }
}

impl From<&str> for UnsharpSpec {
    fn from(sigma: &str) -> Self {
        Self {
            sigma: Some(sigma.to_string()),
            ..Self::default()
        }
    }
}

impl From<&Value> for UnsharpSpec {
    fn from(value: &Value) -> Self {
        UnsharpSpec::from_value(value)
    }
}

/// Format any JSON value as an unsharp argument.
pub fn unsharp(value: &Value) -> String {
    UnsharpSpec::from_value(value).format()
}
