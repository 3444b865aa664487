//! Geometry formatter — structured size/offset specs → `128x128>+10+5%`.
//!
//! A geometry is either a structured [`GeometrySpec`] or an opaque string that
//! is passed through unchanged. Structured specs resolve their size part by a
//! fixed priority order (first match wins) and append an optional offset.

use serde_json::{Map, Value};

use crate::args::error::BuildError;
use crate::args::value::{format_number, format_signed, value_to_string};

/// A geometry argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Structured size/offset description.
    Spec(GeometrySpec),
    /// Already-formatted geometry, forwarded as-is.
    Raw(String),
}

/// Structured geometry. All fields are optional; see [`GeometrySpec::format`]
/// for how they combine.
///
/// Size and offset fields hold the rendered value, so a JSON field counts as
/// set whenever its key is present, whatever its type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometrySpec {
    pub opacity: Option<String>,
    pub sigma: Option<String>,
    pub scale: Option<String>,
    pub area: Option<String>,
    pub scale_width: Option<String>,
    pub scale_height: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Only an explicit `false` has an effect (`!` suffix).
    pub preserve_aspect: Option<bool>,
    pub only_shrink: bool,
    pub only_enlarge: bool,
    pub fill: bool,
    pub offset_x: Option<String>,
    pub offset_y: Option<String>,
    pub use_percentage: bool,
    /// Keys of the source object, in object order. Empty for typed specs.
    pub source_keys: Vec<String>,
}

impl Geometry {
    /// Build from a JSON value: objects become specs, anything else is raw.
    pub fn from_value(value: &Value) -> Geometry {
        match value {
            Value::Object(map) => Geometry::Spec(GeometrySpec::from_object(map)),
            other => Geometry::Raw(value_to_string(other)),
        }
    }

    /// Render the geometry string.
    pub fn format(&self) -> Result<String, BuildError> {
        match self {
            Geometry::Spec(spec) => spec.format(),
            Geometry::Raw(raw) => Ok(raw.clone()),
        }
    }
}

impl From<GeometrySpec> for Geometry {
    fn from(spec: GeometrySpec) -> Self {
        Geometry::Spec(spec)
    }
}

impl From<&str> for Geometry {
    fn from(raw: &str) -> Self {
        Geometry::Raw(raw.to_string())
    }
}

impl From<String> for Geometry {
    fn from(raw: String) -> Self {
        Geometry::Raw(raw)
    }
}

impl From<f64> for Geometry {
    fn from(n: f64) -> Self {
        Geometry::Raw(format_number(n))
    }
}

impl From<u32> for Geometry {
    fn from(n: u32) -> Self {
        Geometry::Raw(n.to_string())
    }
}

impl From<&Value> for Geometry {
    fn from(value: &Value) -> Self {
        Geometry::from_value(value)
    }
}

fn num(n: impl Into<f64>) -> Option<String> {
    Some(format_number(n.into()))
}

impl GeometrySpec {
    /// `{width}x{height}` with no modifier.
    pub fn size(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self {
            width: num(width),
            height: num(height),
            ..Self::default()
        }
    }

    /// `{scale}%`.
    pub fn percent(scale: impl Into<f64>) -> Self {
        Self {
            scale: num(scale),
            ..Self::default()
        }
    }

    /// `{area}@`.
    pub fn pixel_area(area: impl Into<f64>) -> Self {
        Self {
            area: num(area),
            ..Self::default()
        }
    }

    /// `{x}%x{y}%`.
    pub fn percent_xy(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            scale_width: num(x),
            scale_height: num(y),
            ..Self::default()
        }
    }

    /// `{opacity}` or `{opacity}x{sigma}` once a sigma is set.
    pub fn blend(opacity: impl Into<f64>) -> Self {
        Self {
            opacity: num(opacity),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: impl Into<f64>) -> Self {
        self.width = num(width);
        self
    }

    pub fn with_height(mut self, height: impl Into<f64>) -> Self {
        self.height = num(height);
        self
    }

    pub fn with_sigma(mut self, sigma: impl Into<f64>) -> Self {
        self.sigma = num(sigma);
        self
    }

    /// `!` — resize to exactly the given size.
    pub fn ignore_aspect(mut self) -> Self {
        self.preserve_aspect = Some(false);
        self
    }

    /// `>` — only shrink larger images.
    pub fn only_shrink(mut self) -> Self {
        self.only_shrink = true;
        self
    }

    /// `<` — only enlarge smaller images.
    pub fn only_enlarge(mut self) -> Self {
        self.only_enlarge = true;
        self
    }

    /// `^` — fill the given area.
    pub fn fill(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn with_offset(mut self, x: impl Into<f64>, y: impl Into<f64>) -> Self {
        self.offset_x = num(x);
        self.offset_y = num(y);
        self
    }

    pub fn with_offset_x(mut self, x: impl Into<f64>) -> Self {
        self.offset_x = num(x);
        self
    }

    pub fn with_offset_y(mut self, y: impl Into<f64>) -> Self {
        self.offset_y = num(y);
        self
    }

    /// Append `%` to the offset.
    pub fn percentage_offset(mut self) -> Self {
        self.use_percentage = true;
        self
    }

    /// Read a spec out of a JSON object with camelCase keys.
    ///
    /// A size or offset key is set whenever it is present; its value is
    /// rendered verbatim. Modifier keys follow JSON truthiness, except
    /// `preserveAspect` which only reacts to a literal `false`.
    pub fn from_object(map: &Map<String, Value>) -> Self {
        let text = |key: &str| map.get(key).map(value_to_string);
        let flag = |key: &str| map.get(key).is_some_and(is_truthy);

        Self {
            opacity: text("opacity"),
            sigma: text("sigma"),
            scale: text("scale"),
            area: text("area"),
            scale_width: text("scaleWidth"),
            scale_height: text("scaleHeight"),
            width: text("width"),
            height: text("height"),
            preserve_aspect: map.get("preserveAspect").and_then(Value::as_bool),
            only_shrink: flag("onlyShrink"),
            only_enlarge: flag("onlyEnlarge"),
            fill: flag("fill"),
            offset_x: text("offsetX"),
            offset_y: text("offsetY"),
            use_percentage: flag("usePercentage"),
            source_keys: map.keys().cloned().collect(),
        }
    }

    /// Size part followed by offset part.
    pub fn format(&self) -> Result<String, BuildError> {
        let mut out = self.format_size()?;
        out.push_str(&self.format_offset());
        Ok(out)
    }

    fn format_size(&self) -> Result<String, BuildError> {
        if let (Some(opacity), Some(sigma)) = (&self.opacity, &self.sigma) {
            return Ok(format!("{}x{}", opacity, sigma));
        }
        if let Some(opacity) = &self.opacity {
            return Ok(opacity.clone());
        }
        if let Some(scale) = &self.scale {
            return Ok(format!("{}%", scale));
        }
        if let Some(area) = &self.area {
            return Ok(format!("{}@", area));
        }
        if let (Some(sw), Some(sh)) = (&self.scale_width, &self.scale_height) {
            return Ok(format!("{}%x{}%", sw, sh));
        }

        match (&self.width, &self.height) {
            (Some(w), None) => Ok(w.clone()),
            (None, Some(h)) => Ok(format!("x{}", h)),
            (Some(w), Some(h)) => {
                let suffix = if self.preserve_aspect == Some(false) {
                    "!"
                } else if self.only_shrink {
                    ">"
                } else if self.only_enlarge {
                    "<"
                } else if self.fill {
                    "^"
                } else {
                    ""
                };
                Ok(format!("{}x{}{}", w, h, suffix))
            }
            (None, None) => Err(BuildError::UnrecognizedGeometry {
                keys: self.error_keys().join(","),
            }),
        }
    }

    // Missing axis defaults to 0 when the other one is set.
    fn format_offset(&self) -> String {
        if self.offset_x.is_none() && self.offset_y.is_none() {
            return String::new();
        }
        let x = signed(self.offset_x.as_deref());
        let y = signed(self.offset_y.as_deref());
        let pct = if self.use_percentage { "%" } else { "" };
        format!("{}{}{}", x, y, pct)
    }

    // Object specs report their own keys; typed specs report the set fields.
    fn error_keys(&self) -> Vec<String> {
        if !self.source_keys.is_empty() {
            return self.source_keys.clone();
        }
        let set = [
            ("opacity", self.opacity.is_some()),
            ("sigma", self.sigma.is_some()),
            ("scale", self.scale.is_some()),
            ("area", self.area.is_some()),
            ("scaleWidth", self.scale_width.is_some()),
            ("scaleHeight", self.scale_height.is_some()),
            ("preserveAspect", self.preserve_aspect.is_some()),
            ("onlyShrink", self.only_shrink),
            ("onlyEnlarge", self.only_enlarge),
            ("fill", self.fill),
            ("offsetX", self.offset_x.is_some()),
            ("offsetY", self.offset_y.is_some()),
            ("usePercentage", self.use_percentage),
        ];
        set.iter()
            .filter(|(_, present)| *present)
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

// Numeric offsets get an explicit sign; anything else keeps its own.
fn signed(offset: Option<&str>) -> String {
    let raw = offset.unwrap_or("0");
    match raw.trim().parse::<f64>() {
        Ok(n) => format_signed(n),
        Err(_) if raw.starts_with('+') || raw.starts_with('-') => raw.to_string(),
        Err(_) => format!("+{}", raw),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Format any JSON value as a geometry string.
pub fn geometry(value: &Value) -> Result<String, BuildError> {
    Geometry::from_value(value).format()
}
