//! Project configuration (dmgbg.yaml) and resolved settings.
//!
//! Every field of the file is optional. Settings are layered: the style
//! preset first, then the configuration file, then command-line flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BgError, Result};
use crate::fonts::FontRequest;
use crate::style::{Style, DEFAULT_APP_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::types::{Colour, FontRole, Scene};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "dmgbg.yaml";

/// Largest accepted canvas side.
const MAX_SIDE: u32 = 8192;

/// Per-role font overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleConfig {
    pub size: Option<f32>,
    pub candidates: Option<Vec<PathBuf>>,
}

impl RoleConfig {
    fn merge(self, over: RoleConfig) -> Self {
        Self {
            size: over.size.or(self.size),
            candidates: over.candidates.or(self.candidates),
        }
    }
}

/// The `fonts:` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Candidate files for every role, replacing the style's list.
    pub candidates: Option<Vec<PathBuf>>,
    pub title: RoleConfig,
    pub body: RoleConfig,
    pub small: RoleConfig,
    pub symbol: RoleConfig,
}

impl FontsConfig {
    fn role(&self, role: FontRole) -> &RoleConfig {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
            FontRole::Small => &self.small,
            FontRole::Symbol => &self.symbol,
        }
    }

    fn merge(self, over: FontsConfig) -> Self {
        Self {
            candidates: over.candidates.or(self.candidates),
            title: self.title.merge(over.title),
            body: self.body.merge(over.body),
            small: self.small.merge(over.small),
            symbol: self.symbol.merge(over.symbol),
        }
    }
}

/// The `colours:` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColoursConfig {
    pub gradient_start: Option<Colour>,
    pub gradient_end: Option<Colour>,
    pub text: Option<Colour>,
    pub secondary: Option<Colour>,
}

impl ColoursConfig {
    fn merge(self, over: ColoursConfig) -> Self {
        Self {
            gradient_start: over.gradient_start.or(self.gradient_start),
            gradient_end: over.gradient_end.or(self.gradient_end),
            text: over.text.or(self.text),
            secondary: over.secondary.or(self.secondary),
        }
    }
}

/// Configuration as written in dmgbg.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    pub style: Option<Style>,
    pub output: Option<PathBuf>,
    pub dpi: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
    pub instruction: Option<String>,
    pub app_name: Option<String>,
    pub colours: ColoursConfig,
    pub fonts: FontsConfig,
}

impl BackgroundConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BgError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| BgError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `explicit` if given, else `dmgbg.yaml` in `dir` if it exists.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = dir.join(CONFIG_FILENAME);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn merge(self, over: BackgroundConfig) -> Self {
        Self {
            style: over.style.or(self.style),
            output: over.output.or(self.output),
            dpi: over.dpi.or(self.dpi),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            title: over.title.or(self.title),
            instruction: over.instruction.or(self.instruction),
            app_name: over.app_name.or(self.app_name),
            colours: self.colours.merge(over.colours),
            fonts: self.fonts.merge(over.fonts),
        }
    }
}

/// Colours a style draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourScheme {
    pub gradient_start: Colour,
    pub gradient_end: Colour,
    /// Headline and label colour.
    pub text: Colour,
    /// Instruction, outline and arrow colour.
    pub secondary: Colour,
}

/// Fully resolved parameters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub style: Style,
    pub output: PathBuf,
    pub dpi: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub instruction: String,
    pub app_name: String,
    pub colours: ColourScheme,
    pub fonts: Vec<FontRequest>,
}

impl Settings {
    /// Fill in everything the configuration leaves out from its style.
    pub fn from_config(config: &BackgroundConfig) -> Result<Self> {
        let style = config.style.unwrap_or_default();
        let width = config.width.unwrap_or(DEFAULT_WIDTH);
        let height = config.height.unwrap_or(DEFAULT_HEIGHT);
        check_side("width", width)?;
        check_side("height", height)?;

        let dpi = config.dpi.or(style.default_dpi());
        if dpi == Some(0) {
            return Err(BgError::Config {
                message: "dpi must be greater than zero".to_string(),
                help: Some("Omit dpi to write no resolution metadata".to_string()),
            });
        }

        let app_name = config
            .app_name
            .clone()
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| format!("Install {}", app_name));
        let instruction = config
            .instruction
            .clone()
            .unwrap_or_else(|| format!("Drag {} to your Applications folder", app_name));

        let defaults = style.colours();
        let colours = ColourScheme {
            gradient_start: opaque(config.colours.gradient_start).unwrap_or(defaults.gradient_start),
            gradient_end: opaque(config.colours.gradient_end).unwrap_or(defaults.gradient_end),
            text: config.colours.text.unwrap_or(defaults.text),
            secondary: config.colours.secondary.unwrap_or(defaults.secondary),
        };

        let fonts = FontRole::ALL
            .iter()
            .map(|&role| font_request(style, &config.fonts, role))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            style,
            output: config.output.clone().unwrap_or_else(|| style.default_output()),
            dpi,
            width,
            height,
            title,
            instruction,
            app_name,
            colours,
            fonts,
        })
    }

    /// Lay out the scene these settings describe.
    pub fn scene(&self) -> Scene {
        self.style.scene(self)
    }

    /// Put extra candidate files ahead of every role's list.
    pub fn prepend_fonts(&mut self, paths: &[PathBuf]) {
        for request in &mut self.fonts {
            let mut candidates = paths.to_vec();
            candidates.append(&mut request.candidates);
            request.candidates = candidates;
        }
    }

    /// Drop all candidate files so every role uses the built-in face.
    pub fn builtin_fonts_only(&mut self) {
        for request in &mut self.fonts {
            request.candidates.clear();
        }
    }
}

/// Gradient stops are painted as-is; their blend weight is dropped.
fn opaque(colour: Option<Colour>) -> Option<Colour> {
    colour.map(|c| c.with_alpha(255))
}

fn check_side(name: &str, value: u32) -> Result<()> {
    if value == 0 || value > MAX_SIDE {
        return Err(BgError::Config {
            message: format!("{} must be between 1 and {}, got {}", name, MAX_SIDE, value),
            help: None,
        });
    }
    Ok(())
}

/// Point sizes a role may request.
const MIN_FONT_SIZE: f32 = 1.0;
const MAX_FONT_SIZE: f32 = 512.0;

fn font_request(style: Style, fonts: &FontsConfig, role: FontRole) -> Result<FontRequest> {
    let overrides = fonts.role(role);
    let size = overrides.size.unwrap_or_else(|| style.font_size(role));
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
        return Err(BgError::Config {
            message: format!(
                "{} font size must be between {} and {}, got {}",
                role.name(),
                MIN_FONT_SIZE,
                MAX_FONT_SIZE,
                size
            ),
            help: None,
        });
    }

    let candidates = overrides
        .candidates
        .clone()
        .or_else(|| fonts.candidates.clone())
        .unwrap_or_else(|| style.font_candidates());

    Ok(FontRequest::new(role, size, candidates))
}
