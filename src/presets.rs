//! Named filter chains.
//!
//! A preset is a name bound to an ordered list of filters. The built-in
//! table reproduces the seven one-key filters of the original capture tool
//! (grayscale, blur 5, HSV, Lab, CMYK, and the two block-5 pixelations);
//! user chains loaded from a YAML file are merged over the built-ins, with
//! the file winning on name collisions.
//!
//! # File Format
//!
//! ```yaml
//! presets:
//!   posterize:
//!     - filter: pixelate-color
//!       block: 8
//!     - filter: convert-threshold
//!       space: lab
//!       threshold: 100
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use raster_fx::{
    channel::DEFAULT_GRAYSCALE_BOOST,
    convert::{DEFAULT_HSV_THRESHOLD, DEFAULT_THRESHOLD},
    Channel, ChromaOverflow, ColorSpace, Filter, FilterPipeline, FxError,
};

use crate::error::ScopeError;

/// Default blur level for the built-in blur preset.
const DEFAULT_BLUR_LEVEL: usize = 1;

/// Default block size for the pixelation presets.
const DEFAULT_BLOCK_SIZE: usize = 5;

/// One filter step as written in a preset file.
///
/// Channel and color space names are kept as strings at this layer and
/// validated when the spec is lowered to an engine [`Filter`], so a preset
/// file error points at the offending name rather than failing the whole
/// parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "kebab-case")]
pub enum FilterSpec {
    /// Grayscale conversion; `boost` defaults to 1.2.
    Grayscale {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        boost: Option<f32>,
    },
    /// Per-channel brightness offset.
    Brightness { amount: f32 },
    /// Channel extraction (`red` / `green` / `blue`).
    Extract { channel: String },
    /// Channel binarization.
    Threshold { channel: String, threshold: f32 },
    /// Color space visualization (`hsv` / `lab` / `cmyk` / `ycbcr`).
    Convert { space: String },
    /// Thresholded color space visualization. The threshold defaults to the
    /// space's conventional cutoff (125 for HSV, 128 otherwise).
    ConvertThreshold {
        space: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<f32>,
        /// Wrap out-of-range YCbCr chroma instead of clamping.
        #[serde(default)]
        wrap_chroma: bool,
    },
    /// Box blur; `level` defaults to 1.
    Blur {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<usize>,
    },
    /// Grayscale pixelation; `block` defaults to 5.
    PixelateGray {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        block: Option<usize>,
    },
    /// Color pixelation; `block` defaults to 5.
    PixelateColor {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        block: Option<usize>,
    },
}

impl FilterSpec {
    /// Lower this spec to an engine filter, validating names and applying
    /// defaults.
    pub fn to_filter(&self) -> Result<Filter, ScopeError> {
        let filter = match self {
            FilterSpec::Grayscale { boost } => Filter::Grayscale {
                boost: boost.unwrap_or(DEFAULT_GRAYSCALE_BOOST),
            },
            FilterSpec::Brightness { amount } => Filter::Brightness { amount: *amount },
            FilterSpec::Extract { channel } => Filter::Extract {
                channel: parse_channel(channel)?,
            },
            FilterSpec::Threshold { channel, threshold } => Filter::ChannelThreshold {
                channel: parse_channel(channel)?,
                threshold: *threshold,
            },
            FilterSpec::Convert { space } => Filter::Convert {
                space: parse_space(space)?,
            },
            FilterSpec::ConvertThreshold {
                space,
                threshold,
                wrap_chroma,
            } => {
                let space = parse_space(space)?;
                let default = match space {
                    ColorSpace::Hsv => DEFAULT_HSV_THRESHOLD,
                    _ => DEFAULT_THRESHOLD,
                };
                Filter::ConvertThreshold {
                    space,
                    threshold: threshold.unwrap_or(default),
                    overflow: if *wrap_chroma {
                        ChromaOverflow::Wrap
                    } else {
                        ChromaOverflow::Clamp
                    },
                }
            }
            FilterSpec::Blur { level } => Filter::Blur {
                level: level.unwrap_or(DEFAULT_BLUR_LEVEL),
            },
            FilterSpec::PixelateGray { block } => Filter::PixelateGray {
                block_size: block.unwrap_or(DEFAULT_BLOCK_SIZE),
            },
            FilterSpec::PixelateColor { block } => Filter::PixelateColor {
                block_size: block.unwrap_or(DEFAULT_BLOCK_SIZE),
            },
        };
        Ok(filter)
    }

    /// One-line human description for `pixelscope presets`.
    pub fn describe(&self) -> String {
        match self {
            FilterSpec::Grayscale { boost } => {
                format!("grayscale (boost {})", boost.unwrap_or(DEFAULT_GRAYSCALE_BOOST))
            }
            FilterSpec::Brightness { amount } => format!("brightness {amount:+}"),
            FilterSpec::Extract { channel } => format!("extract {channel}"),
            FilterSpec::Threshold { channel, threshold } => {
                format!("threshold {channel} at {threshold}")
            }
            FilterSpec::Convert { space } => format!("convert to {space}"),
            FilterSpec::ConvertThreshold { space, threshold, .. } => match threshold {
                Some(t) => format!("convert to {space} with threshold {t}"),
                None => format!("convert to {space} with default threshold"),
            },
            FilterSpec::Blur { level } => format!("blur level {}", level.unwrap_or(DEFAULT_BLUR_LEVEL)),
            FilterSpec::PixelateGray { block } => {
                format!("pixelate gray, block {}", block.unwrap_or(DEFAULT_BLOCK_SIZE))
            }
            FilterSpec::PixelateColor { block } => {
                format!("pixelate color, block {}", block.unwrap_or(DEFAULT_BLOCK_SIZE))
            }
        }
    }
}

fn parse_channel(name: &str) -> Result<Channel, ScopeError> {
    name.parse::<Channel>()
        .map_err(|e| ScopeError::Engine(FxError::from(e)))
}

fn parse_space(name: &str) -> Result<ColorSpace, ScopeError> {
    name.parse::<ColorSpace>()
        .map_err(|e| ScopeError::Engine(FxError::from(e)))
}

/// On-disk shape of a preset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetFile {
    /// Preset name to filter chain.
    pub presets: BTreeMap<String, Vec<FilterSpec>>,
}

/// The resolved preset table: built-ins plus any user file.
#[derive(Debug, Clone)]
pub struct PresetBook {
    presets: BTreeMap<String, Vec<FilterSpec>>,
}

impl PresetBook {
    /// The built-in presets: the original one-key filter table.
    pub fn built_in() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(
            "grayscale".to_string(),
            vec![FilterSpec::Grayscale { boost: None }],
        );
        presets.insert(
            "blur".to_string(),
            vec![FilterSpec::Blur { level: Some(5) }],
        );
        presets.insert(
            "hsv".to_string(),
            vec![FilterSpec::Convert { space: "hsv".to_string() }],
        );
        presets.insert(
            "lab".to_string(),
            vec![FilterSpec::Convert { space: "lab".to_string() }],
        );
        presets.insert(
            "cmyk".to_string(),
            vec![FilterSpec::Convert { space: "cmyk".to_string() }],
        );
        presets.insert(
            "pixelate-gray".to_string(),
            vec![FilterSpec::PixelateGray { block: Some(5) }],
        );
        presets.insert(
            "pixelate-color".to_string(),
            vec![FilterSpec::PixelateColor { block: Some(5) }],
        );
        Self { presets }
    }

    /// Built-ins merged with a YAML preset file; the file wins on name
    /// collisions.
    pub fn with_file(path: &Path) -> Result<Self, ScopeError> {
        let mut book = Self::built_in();
        let text = fs::read_to_string(path)?;
        book.merge_yaml(&text)?;
        Ok(book)
    }

    /// Merge preset definitions from YAML text over the current table.
    pub fn merge_yaml(&mut self, text: &str) -> Result<(), ScopeError> {
        let file: PresetFile = serde_yaml::from_str(text)?;
        self.presets.extend(file.presets);
        Ok(())
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// The raw filter chain of every preset, for listing.
    pub fn chains(&self) -> impl Iterator<Item = (&str, &[FilterSpec])> {
        self.presets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Lower a named preset to a runnable [`FilterPipeline`].
    ///
    /// # Errors
    ///
    /// [`ScopeError::UnknownPreset`] if the name is not in the table, or an
    /// engine error if a chain entry names a bad channel or color space.
    pub fn pipeline(&self, name: &str) -> Result<FilterPipeline, ScopeError> {
        let specs = self
            .presets
            .get(name)
            .ok_or_else(|| ScopeError::UnknownPreset(name.to_string()))?;
        specs
            .iter()
            .map(FilterSpec::to_filter)
            .collect::<Result<FilterPipeline, _>>()
    }
}

impl Default for PresetBook {
    fn default() -> Self {
        Self::built_in()
    }
}
