//! Declarative description of one background image.
//!
//! A `Scene` is built once (see `style`) and never mutated; the renderer
//! walks it in a fixed order and only the canvas accumulates changes.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Colour, Point};

/// Logical font roles, each bound to one resolved face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Title,
    Body,
    Small,
    Symbol,
}

impl FontRole {
    pub const ALL: [FontRole; 4] = [
        FontRole::Title,
        FontRole::Body,
        FontRole::Small,
        FontRole::Symbol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontRole::Title => "title",
            FontRole::Body => "body",
            FontRole::Small => "small",
            FontRole::Symbol => "symbol",
        }
    }
}

/// Vertical two-stop colour ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub start: Colour,
    pub end: Colour,
}

impl GradientSpec {
    pub const fn vertical(start: Colour, end: Colour) -> Self {
        Self { start, end }
    }

    /// A gradient whose endpoints are equal.
    pub const fn flat(colour: Colour) -> Self {
        Self::vertical(colour, colour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayGeometry {
    /// Filled ellipse inscribed in an inclusive bounding box.
    Ellipse(BoundingBox),
    /// Filled polygon.
    Polygon(Vec<Point>),
    /// Stroked segment.
    Line { from: Point, to: Point, width: u32 },
}

/// A translucent decorative shape. `colour.a` is the blend weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayShape {
    pub geometry: OverlayGeometry,
    pub colour: Colour,
}

impl OverlayShape {
    pub fn ellipse(bounds: BoundingBox, colour: Colour) -> Self {
        Self {
            geometry: OverlayGeometry::Ellipse(bounds),
            colour,
        }
    }
}

/// Offset copy of a text block drawn before the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    pub offset: Point,
    pub colour: Colour,
}

impl Shadow {
    /// Fully darkened variant of `colour` at the given blend weight.
    pub fn beneath(colour: Colour, dx: i32, dy: i32, alpha: u8) -> Self {
        Self {
            offset: Point::new(dx, dy),
            colour: colour.darken(100.0).with_alpha(alpha),
        }
    }
}

/// A horizontally centred line of text at a fixed vertical offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub role: FontRole,
    pub y: i32,
    pub colour: Colour,
    pub shadow: Option<Shadow>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, role: FontRole, y: i32, colour: Colour) -> Self {
        Self {
            text: text.into(),
            role,
            y,
            colour,
            shadow: None,
        }
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Square icon stand-in with an optional centred label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPlaceholder {
    pub origin: Point,
    pub size: u32,
    pub radius: u32,
    pub fill: Colour,
    pub outline: Colour,
    pub outline_width: u32,
    pub label: Option<String>,
    pub label_colour: Colour,
}

impl IconPlaceholder {
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.size as i32
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size as i32
    }

    pub fn mid_y(&self) -> i32 {
        self.origin.y + self.size as i32 / 2
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.origin, Point::new(self.right(), self.bottom()))
    }
}

/// Stroke parameters for a line-and-triangle arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowStyle {
    pub colour: Colour,
    pub line_width: u32,
    pub head_length: i32,
    pub head_half_width: i32,
    /// Clearance between each icon edge and the arrow ends.
    pub gap: i32,
}

/// How the two icons are connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrowSpec {
    /// A centred arrow character, e.g. `→`.
    Glyph(TextBlock),
    /// A shaft plus triangular head between the icons.
    Geometric(ArrowStyle),
}

/// Everything needed to render one background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub gradient: GradientSpec,
    pub overlays: Vec<OverlayShape>,
    pub texts: Vec<TextBlock>,
    /// Source icon (left) and destination icon (right).
    pub icons: [IconPlaceholder; 2],
    pub arrow: ArrowSpec,
}
