//! dmgbg - Disk image background generator
//!
//! Renders the window background shown when a macOS disk image is opened:
//! a vertical gradient with soft accent circles, centred install text, two
//! icon placeholders and an arrow between them, written as PNG.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod fonts;
pub mod output;
pub mod render;
pub mod style;
pub mod types;

pub use compose::{generate, render_scene, Generated};
pub use config::{BackgroundConfig, ColourScheme, Settings, CONFIG_FILENAME};
pub use error::{BgError, Result};
pub use fonts::{Font, FontRequest, FontResolver, FontSet, FontSource, RoleReport};
pub use render::{write_png, Canvas};
pub use style::Style;
pub use types::{
    ArrowSpec, ArrowStyle, BoundingBox, Colour, FontRole, GradientSpec, IconPlaceholder,
    OverlayGeometry, OverlayShape, Point, Scene, Shadow, TextBlock,
};
