//! Option registry — single source of truth for every supported option.
//!
//! Each entry ties together:
//! - the JS-style option name used in declarative argument lists (`autoOrient`),
//! - the command-line flag (`-auto-orient`),
//! - how its value is rendered ([`ArgKind`]),
//! - the fluent method generated on [`MagickCommand`] (`auto_orient()`).
//!
//! Adding an option = one line in the `option_registry!` invocation below.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde_json::Value;

use crate::args::definition::Definitions;
use crate::args::error::BuildError;
use crate::args::geometry::Geometry;
use crate::args::unsharp::Unsharp;
use crate::args::value::{quote, value_to_string};
use crate::command::MagickCommand;

/// How an option's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// No value (`-trim`).
    Flag,
    /// Value as-is (`-fuzz 5`).
    Bare,
    /// Value in single quotes (`-font 'DejaVu Sans'`).
    Quoted,
    /// Geometry-formatted, quoted (`-thumbnail '128x128>'`).
    Geometry,
    /// Unsharp-formatted, quoted (`-unsharp '0x0.5+1+0.05'`).
    Unsharp,
    /// One `-define '<token>'` pair per definition.
    Define,
    /// Raw tokens forwarded literally, no flag.
    Passthrough,
}

/// A typed option value, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionArg {
    None,
    Text(String),
    Geometry(Geometry),
    Unsharp(Unsharp),
    Definitions(Definitions),
    Tokens(Vec<String>),
}

impl OptionArg {
    /// Interpret a JSON value according to the option's kind.
    ///
    /// `None` means the option was named without a value.
    pub fn from_json(kind: ArgKind, value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return match kind {
                ArgKind::Passthrough => OptionArg::Tokens(Vec::new()),
                _ => OptionArg::None,
            };
        };

        match kind {
            ArgKind::Flag => OptionArg::None,
            ArgKind::Bare | ArgKind::Quoted => match value {
                Value::Null => OptionArg::None,
                other => OptionArg::Text(value_to_string(other)),
            },
            ArgKind::Geometry => OptionArg::Geometry(Geometry::from_value(value)),
            ArgKind::Unsharp => OptionArg::Unsharp(Unsharp::from_value(value)),
            ArgKind::Define => OptionArg::Definitions(Definitions::from_value(value)),
            ArgKind::Passthrough => OptionArg::Tokens(match value {
                Value::Array(items) => items.iter().map(value_to_string).collect(),
                Value::Null => Vec::new(),
                other => vec![value_to_string(other)],
            }),
        }
    }
}

/// A single option definition, as listed by [`option_registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDef {
    pub id: OptionId,
    /// Name used in declarative argument lists.
    pub name: &'static str,
    /// Command-line flag; empty for passthrough.
    pub flag: &'static str,
    pub kind: ArgKind,
}

macro_rules! option_registry {
    (@method Flag $method:ident $variant:ident $flag:literal) => {
        #[doc = concat!("`", $flag, "`")]
        pub fn $method(&mut self) -> &mut Self {
            let id = OptionId::$variant;
            self.push_tokens(id, id.flag_tokens())
        }
    };
    (@method Bare $method:ident $variant:ident $flag:literal) => {
        #[doc = concat!("`", $flag, " <value>`")]
        pub fn $method(&mut self, value: impl fmt::Display) -> &mut Self {
            let id = OptionId::$variant;
            self.push_tokens(id, id.text_tokens(value.to_string()))
        }
    };
    (@method Quoted $method:ident $variant:ident $flag:literal) => {
        #[doc = concat!("`", $flag, " '<value>'`")]
        pub fn $method(&mut self, value: impl fmt::Display) -> &mut Self {
            let id = OptionId::$variant;
            self.push_tokens(id, id.text_tokens(value.to_string()))
        }
    };
    (@method Geometry $method:ident $variant:ident $flag:literal) => {
        #[doc = concat!("`", $flag, " '<geometry>'`")]
        pub fn $method(&mut self, geometry: impl Into<Geometry>) -> Result<&mut Self, BuildError> {
            let id = OptionId::$variant;
            let tokens = id.render(OptionArg::Geometry(geometry.into()))?;
            Ok(self.push_tokens(id, tokens))
        }
    };
    (@method Unsharp $method:ident $variant:ident $flag:literal) => {
        #[doc = concat!("`", $flag, " '<radius>x<sigma>+<gain>+<threshold>'`")]
        pub fn $method(&mut self, spec: impl Into<Unsharp>) -> &mut Self {
            let id = OptionId::$variant;
            self.push_tokens(id, id.unsharp_tokens(&spec.into()))
        }
    };
    (@method Define $method:ident $variant:ident $flag:literal) => {
        #[doc = concat!("`", $flag, " '<key:subkey=value>'`, once per definition")]
        pub fn $method(&mut self, definitions: impl Into<Definitions>) -> Result<&mut Self, BuildError> {
            let id = OptionId::$variant;
            let tokens = id.render(OptionArg::Definitions(definitions.into()))?;
            Ok(self.push_tokens(id, tokens))
        }
    };
    (@method Passthrough $method:ident $variant:ident $flag:literal) => {
        /// Append a literal token (file names, unmodelled options).
        pub fn $method(&mut self, token: impl Into<String>) -> &mut Self {
            self.push_tokens(OptionId::$variant, vec![token.into()])
        }
    };
    ($( $method:ident / $variant:ident => $name:literal, $flag:literal, $kind:ident; )*) => {
        /// Identifier of every supported option.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum OptionId {
            $( $variant, )*
        }

        impl OptionId {
            /// All options, in registry order.
            pub const ALL: &'static [OptionId] = &[ $( OptionId::$variant, )* ];

            /// Name used in declarative argument lists.
            pub fn name(self) -> &'static str {
                match self {
                    $( OptionId::$variant => $name, )*
                }
            }

            /// Command-line flag (`-` form).
            pub fn flag(self) -> &'static str {
                match self {
                    $( OptionId::$variant => $flag, )*
                }
            }

            pub fn kind(self) -> ArgKind {
                match self {
                    $( OptionId::$variant => ArgKind::$kind, )*
                }
            }
        }

        impl MagickCommand {
            $( option_registry!(@method $kind $method $variant $flag); )*
        }
    };
}

option_registry! {
    // === Pass-through and structured options ===
    add / Add => "add", "", Passthrough;
    define / Define => "define", "-define", Define;
    unsharp / Unsharp => "unsharp", "-unsharp", Unsharp;

    // === Flag-only options ===
    adjoin / Adjoin => "adjoin", "-adjoin", Flag;
    antialias / Antialias => "antialias", "-antialias", Flag;
    append / Append => "append", "-append", Flag;
    auto_gamma / AutoGamma => "autoGamma", "-auto-gamma", Flag;
    auto_level / AutoLevel => "autoLevel", "-auto-level", Flag;
    auto_orient / AutoOrient => "autoOrient", "-auto-orient", Flag;
    black_point_compensation / BlackPointCompensation => "blackPointCompensation", "-black-point-compensation", Flag;
    clamp / Clamp => "clamp", "-clamp", Flag;
    clip / Clip => "clip", "-clip", Flag;
    clut / Clut => "clut", "-clut", Flag;
    coalesce / Coalesce => "coalesce", "-coalesce", Flag;
    combine / Combine => "combine", "-combine", Flag;
    composite / Composite => "composite", "-composite", Flag;
    contrast / Contrast => "contrast", "-contrast", Flag;
    deconstruct / Deconstruct => "deconstruct", "-deconstruct", Flag;
    despeckle / Despeckle => "despeckle", "-despeckle", Flag;
    enhance / Enhance => "enhance", "-enhance", Flag;
    equalize / Equalize => "equalize", "-equalize", Flag;
    flatten / Flatten => "flatten", "-flatten", Flag;
    flip / Flip => "flip", "-flip", Flag;
    flop / Flop => "flop", "-flop", Flag;
    hald_clut / HaldClut => "haldClut", "-hald-clut", Flag;
    identify / Identify => "identify", "-identify", Flag;
    magnify / Magnify => "magnify", "-magnify", Flag;
    minify / Minify => "minify", "-minify", Flag;
    monitor / Monitor => "monitor", "-monitor", Flag;
    monochrome / Monochrome => "monochrome", "-monochrome", Flag;
    mosaic / Mosaic => "mosaic", "-mosaic", Flag;
    negate / Negate => "negate", "-negate", Flag;
    normalize / Normalize => "normalize", "-normalize", Flag;
    ping / Ping => "ping", "-ping", Flag;
    quiet / Quiet => "quiet", "-quiet", Flag;
    render / Render => "render", "-render", Flag;
    reverse / Reverse => "reverse", "-reverse", Flag;
    separate / Separate => "separate", "-separate", Flag;
    strip / Strip => "strip", "-strip", Flag;
    transpose / Transpose => "transpose", "-transpose", Flag;
    transverse / Transverse => "transverse", "-transverse", Flag;
    trim / Trim => "trim", "-trim", Flag;
    verbose / Verbose => "verbose", "-verbose", Flag;

    // === Bare-value options ===
    affine / Affine => "affine", "-affine", Bare;
    alpha / Alpha => "alpha", "-alpha", Bare;
    attenuate / Attenuate => "attenuate", "-attenuate", Bare;
    bias / Bias => "bias", "-bias", Bare;
    black_threshold / BlackThreshold => "blackThreshold", "-black-threshold", Bare;
    blue_shift / BlueShift => "blueShift", "-blue-shift", Bare;
    channel / Channel => "channel", "-channel", Bare;
    charcoal / Charcoal => "charcoal", "-charcoal", Bare;
    colorize / Colorize => "colorize", "-colorize", Bare;
    colors / Colors => "colors", "-colors", Bare;
    colorspace / Colorspace => "colorspace", "-colorspace", Bare;
    compose / Compose => "compose", "-compose", Bare;
    compress / Compress => "compress", "-compress", Bare;
    cycle / Cycle => "cycle", "-cycle", Bare;
    debug / Debug => "debug", "-debug", Bare;
    delay / Delay => "delay", "-delay", Bare;
    depth / Depth => "depth", "-depth", Bare;
    deskew / Deskew => "deskew", "-deskew", Bare;
    dispose / Dispose => "dispose", "-dispose", Bare;
    dither / Dither => "dither", "-dither", Bare;
    edge / Edge => "edge", "-edge", Bare;
    emboss / Emboss => "emboss", "-emboss", Bare;
    encoding / Encoding => "encoding", "-encoding", Bare;
    endian / Endian => "endian", "-endian", Bare;
    filter / Filter => "filter", "-filter", Bare;
    fuzz / Fuzz => "fuzz", "-fuzz", Bare;
    gamma / Gamma => "gamma", "-gamma", Bare;
    gravity / Gravity => "gravity", "-gravity", Bare;
    implode / Implode => "implode", "-implode", Bare;
    intent / Intent => "intent", "-intent", Bare;
    interlace / Interlace => "interlace", "-interlace", Bare;
    interline_spacing / InterlineSpacing => "interlineSpacing", "-interline-spacing", Bare;
    interpolate / Interpolate => "interpolate", "-interpolate", Bare;
    interword_spacing / InterwordSpacing => "interwordSpacing", "-interword-spacing", Bare;
    kerning / Kerning => "kerning", "-kerning", Bare;
    layers / Layers => "layers", "-layers", Bare;
    level / Level => "level", "-level", Bare;
    loop_count / Loop => "loop", "-loop", Bare;
    modulate / Modulate => "modulate", "-modulate", Bare;
    orient / Orient => "orient", "-orient", Bare;
    paint / Paint => "paint", "-paint", Bare;
    pointsize / Pointsize => "pointsize", "-pointsize", Bare;
    posterize / Posterize => "posterize", "-posterize", Bare;
    preview / Preview => "preview", "-preview", Bare;
    quality / Quality => "quality", "-quality", Bare;
    quantize / Quantize => "quantize", "-quantize", Bare;
    random_threshold / RandomThreshold => "randomThreshold", "-random-threshold", Bare;
    scene / Scene => "scene", "-scene", Bare;
    seed / Seed => "seed", "-seed", Bare;
    segment / Segment => "segment", "-segment", Bare;
    sepia_tone / SepiaTone => "sepiaTone", "-sepia-tone", Bare;
    solarize / Solarize => "solarize", "-solarize", Bare;
    spread / Spread => "spread", "-spread", Bare;
    strokewidth / Strokewidth => "strokewidth", "-strokewidth", Bare;
    swirl / Swirl => "swirl", "-swirl", Bare;
    threshold / Threshold => "threshold", "-threshold", Bare;
    tint / Tint => "tint", "-tint", Bare;
    treedepth / Treedepth => "treedepth", "-treedepth", Bare;
    image_type / Type => "type", "-type", Bare;
    units / Units => "units", "-units", Bare;
    virtual_pixel / VirtualPixel => "virtualPixel", "-virtual-pixel", Bare;
    weight / Weight => "weight", "-weight", Bare;
    white_point / WhitePoint => "whitePoint", "-white-point", Bare;
    white_threshold / WhiteThreshold => "whiteThreshold", "-white-threshold", Bare;

    // === Quoted-value options (colors, text, paths) ===
    background / Background => "background", "-background", Quoted;
    bordercolor / Bordercolor => "bordercolor", "-bordercolor", Quoted;
    cdl / Cdl => "cdl", "-cdl", Quoted;
    comment / Comment => "comment", "-comment", Quoted;
    draw / Draw => "draw", "-draw", Quoted;
    family / Family => "family", "-family", Quoted;
    fill / Fill => "fill", "-fill", Quoted;
    font / Font => "font", "-font", Quoted;
    format / Format => "format", "-format", Quoted;
    fx / Fx => "fx", "-fx", Quoted;
    label / Label => "label", "-label", Quoted;
    mattecolor / Mattecolor => "mattecolor", "-mattecolor", Quoted;
    opaque / Opaque => "opaque", "-opaque", Quoted;
    profile / Profile => "profile", "-profile", Quoted;
    rotate / Rotate => "rotate", "-rotate", Quoted;
    stroke / Stroke => "stroke", "-stroke", Quoted;
    texture / Texture => "texture", "-texture", Quoted;
    tile / Tile => "tile", "-tile", Quoted;
    title / Title => "title", "-title", Quoted;
    transparent / Transparent => "transparent", "-transparent", Quoted;
    transparent_color / TransparentColor => "transparentColor", "-transparent-color", Quoted;
    undercolor / Undercolor => "undercolor", "-undercolor", Quoted;
    write / Write => "write", "-write", Quoted;

    // === Geometry options ===
    adaptive_blur / AdaptiveBlur => "adaptiveBlur", "-adaptive-blur", Geometry;
    adaptive_resize / AdaptiveResize => "adaptiveResize", "-adaptive-resize", Geometry;
    adaptive_sharpen / AdaptiveSharpen => "adaptiveSharpen", "-adaptive-sharpen", Geometry;
    blur / Blur => "blur", "-blur", Geometry;
    border / Border => "border", "-border", Geometry;
    brightness_contrast / BrightnessContrast => "brightnessContrast", "-brightness-contrast", Geometry;
    chop / Chop => "chop", "-chop", Geometry;
    contrast_stretch / ContrastStretch => "contrastStretch", "-contrast-stretch", Geometry;
    crop / Crop => "crop", "-crop", Geometry;
    density / Density => "density", "-density", Geometry;
    extent / Extent => "extent", "-extent", Geometry;
    extract / Extract => "extract", "-extract", Geometry;
    frame / Frame => "frame", "-frame", Geometry;
    gaussian_blur / GaussianBlur => "gaussianBlur", "-gaussian-blur", Geometry;
    geometry / Geometry => "geometry", "-geometry", Geometry;
    linear_stretch / LinearStretch => "linearStretch", "-linear-stretch", Geometry;
    liquid_rescale / LiquidRescale => "liquidRescale", "-liquid-rescale", Geometry;
    median / Median => "median", "-median", Geometry;
    motion_blur / MotionBlur => "motionBlur", "-motion-blur", Geometry;
    noise / Noise => "noise", "-noise", Geometry;
    page / Page => "page", "-page", Geometry;
    raise / Raise => "raise", "-raise", Geometry;
    region / Region => "region", "-region", Geometry;
    repage / Repage => "repage", "-repage", Geometry;
    resample / Resample => "resample", "-resample", Geometry;
    resize / Resize => "resize", "-resize", Geometry;
    roll / Roll => "roll", "-roll", Geometry;
    sample / Sample => "sample", "-sample", Geometry;
    sampling_factor / SamplingFactor => "samplingFactor", "-sampling-factor", Geometry;
    scale / Scale => "scale", "-scale", Geometry;
    shade / Shade => "shade", "-shade", Geometry;
    shadow / Shadow => "shadow", "-shadow", Geometry;
    sharpen / Sharpen => "sharpen", "-sharpen", Geometry;
    shave / Shave => "shave", "-shave", Geometry;
    shear / Shear => "shear", "-shear", Geometry;
    sigmoidal_contrast / SigmoidalContrast => "sigmoidalContrast", "-sigmoidal-contrast", Geometry;
    size / Size => "size", "-size", Geometry;
    sketch / Sketch => "sketch", "-sketch", Geometry;
    splice / Splice => "splice", "-splice", Geometry;
    thumbnail / Thumbnail => "thumbnail", "-thumbnail", Geometry;
    vignette / Vignette => "vignette", "-vignette", Geometry;
    wave / Wave => "wave", "-wave", Geometry;
}

static BY_NAME: LazyLock<HashMap<&'static str, OptionId>> =
    LazyLock::new(|| OptionId::ALL.iter().map(|id| (id.name(), *id)).collect());

impl OptionId {
    /// Look an option up by its declarative name (`"autoOrient"`).
    pub fn lookup(name: &str) -> Option<OptionId> {
        BY_NAME.get(name).copied()
    }

    /// Like [`OptionId::lookup`], failing with `UnknownOption`.
    pub fn resolve(name: &str) -> Result<OptionId, BuildError> {
        Self::lookup(name).ok_or_else(|| BuildError::UnknownOption {
            name: name.to_string(),
        })
    }

    pub fn def(self) -> OptionDef {
        OptionDef {
            id: self,
            name: self.name(),
            flag: self.flag(),
            kind: self.kind(),
        }
    }

    /// Render an option and its value into argument tokens.
    pub fn render(self, arg: OptionArg) -> Result<Vec<String>, BuildError> {
        let tokens = match arg {
            OptionArg::None => self.flag_tokens(),
            OptionArg::Text(text) => self.text_tokens(text),
            OptionArg::Geometry(geometry) => vec![self.flag().to_string(), quote(&geometry.format()?)],
            OptionArg::Unsharp(spec) => self.unsharp_tokens(&spec),
            OptionArg::Definitions(definitions) => definitions
                .format()?
                .iter()
                .flat_map(|token| [self.flag().to_string(), quote(token)])
                .collect(),
            OptionArg::Tokens(tokens) => tokens,
        };
        Ok(tokens)
    }

    /// Reset form: `+flag`, no value. Passthrough has no flag to reset.
    pub fn reset_tokens(self) -> Vec<String> {
        match self.flag().strip_prefix('-') {
            Some(name) => vec![format!("+{}", name)],
            None => self.flag_tokens(),
        }
    }

    pub(crate) fn flag_tokens(self) -> Vec<String> {
        match self.flag() {
            "" => Vec::new(),
            flag => vec![flag.to_string()],
        }
    }

    pub(crate) fn text_tokens(self, text: String) -> Vec<String> {
        match self.kind() {
            ArgKind::Passthrough => vec![text],
            ArgKind::Flag | ArgKind::Bare => vec![self.flag().to_string(), text],
            ArgKind::Quoted | ArgKind::Geometry | ArgKind::Unsharp | ArgKind::Define => {
                vec![self.flag().to_string(), quote(&text)]
            }
        }
    }

    pub(crate) fn unsharp_tokens(self, spec: &Unsharp) -> Vec<String> {
        vec![self.flag().to_string(), quote(&spec.format())]
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the complete option registry.
pub fn option_registry() -> Vec<OptionDef> {
    OptionId::ALL.iter().map(|id| id.def()).collect()
}
