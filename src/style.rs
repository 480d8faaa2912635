//! Style presets.
//!
//! Both looks share one pipeline; a style only decides the colours, font
//! candidates and where everything sits. `Classic` is the purple gradient
//! with shadowed white text and a glyph arrow, `Modern` the flat light
//! design with labelled rounded icons and a drawn arrow.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::{ColourScheme, Settings};
use crate::fonts::FontRequest;
use crate::types::{
    ArrowSpec, ArrowStyle, BoundingBox, Colour, FontRole, GradientSpec, IconPlaceholder,
    OverlayShape, Point, Scene, Shadow, TextBlock,
};

/// Canvas size of a disk-image window background.
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// The product name used when none is configured.
pub const DEFAULT_APP_NAME: &str = "Phim";

const MACOS_HELVETICA: &str = "/System/Library/Fonts/Helvetica.ttc";
const LINUX_FONTS: [&str; 2] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Purple gradient, shadowed text, glyph arrow
    Classic,
    /// Light flat design, labelled icons, drawn arrow
    #[default]
    Modern,
}

impl Style {
    pub fn name(self) -> &'static str {
        match self {
            Style::Classic => "classic",
            Style::Modern => "modern",
        }
    }

    /// Where the image goes unless configured otherwise.
    pub fn default_output(self) -> PathBuf {
        match self {
            Style::Classic => PathBuf::from("dmg-background.png"),
            Style::Modern => PathBuf::from("dmg-assets/dmg-background.png"),
        }
    }

    /// Resolution metadata written unless configured otherwise.
    pub fn default_dpi(self) -> Option<u32> {
        match self {
            Style::Classic => None,
            Style::Modern => Some(144),
        }
    }

    pub fn colours(self) -> ColourScheme {
        match self {
            Style::Classic => ColourScheme {
                gradient_start: Colour::rgb(118, 75, 162),
                gradient_end: Colour::rgb(102, 126, 234),
                text: Colour::WHITE,
                secondary: Colour::WHITE,
            },
            Style::Modern => ColourScheme {
                gradient_start: Colour::grey(245),
                gradient_end: Colour::grey(250),
                text: Colour::rgb(51, 51, 51),
                secondary: Colour::rgb(102, 102, 102),
            },
        }
    }

    /// Candidate font files, most preferred first.
    pub fn font_candidates(self) -> Vec<PathBuf> {
        let preferred: &[&str] = match self {
            Style::Classic => &[MACOS_HELVETICA],
            Style::Modern => &[
                "/System/Library/Fonts/Supplemental/SF Pro Display.ttf",
                "/System/Library/Fonts/SF-Pro-Display-Regular.otf",
                MACOS_HELVETICA,
                "/Library/Fonts/SF-Pro-Display-Regular.otf",
            ],
        };
        preferred
            .iter()
            .chain(LINUX_FONTS.iter())
            .map(PathBuf::from)
            .collect()
    }

    pub fn font_size(self, role: FontRole) -> f32 {
        match (self, role) {
            (Style::Classic, FontRole::Title) => 48.0,
            (Style::Classic, FontRole::Body) => 20.0,
            (Style::Modern, FontRole::Title) => 42.0,
            (Style::Modern, FontRole::Body) => 18.0,
            (_, FontRole::Small) => 14.0,
            (_, FontRole::Symbol) => 36.0,
        }
    }

    /// Font requests for every role with this style's defaults.
    pub fn font_requests(self) -> Vec<FontRequest> {
        FontRole::ALL
            .iter()
            .map(|&role| FontRequest::new(role, self.font_size(role), self.font_candidates()))
            .collect()
    }

    /// Lay out the scene for these settings.
    pub fn scene(self, settings: &Settings) -> Scene {
        match self {
            Style::Classic => classic_scene(settings),
            Style::Modern => modern_scene(settings),
        }
    }
}

fn corner_box(min: (i32, i32), max: (i32, i32)) -> BoundingBox {
    BoundingBox::new(Point::new(min.0, min.1), Point::new(max.0, max.1))
}

fn classic_scene(settings: &Settings) -> Scene {
    let (w, h) = (settings.width as i32, settings.height as i32);
    let colours = &settings.colours;
    let accent = Colour::WHITE;

    let icon = |x: i32| IconPlaceholder {
        origin: Point::new(x, 200),
        size: 50,
        radius: 0,
        fill: colours.text.with_alpha(60),
        outline: colours.secondary,
        outline_width: 2,
        label: None,
        label_colour: colours.text,
    };

    Scene {
        width: settings.width,
        height: settings.height,
        gradient: GradientSpec::vertical(colours.gradient_start, colours.gradient_end),
        overlays: vec![
            OverlayShape::ellipse(corner_box((-150, -150), (150, 150)), accent.with_alpha(25)),
            OverlayShape::ellipse(
                corner_box((w - 100, h - 100), (w + 100, h + 100)),
                accent.with_alpha(25),
            ),
            OverlayShape::ellipse(corner_box((w - 200, -50), (w - 50, 100)), accent.with_alpha(20)),
        ],
        texts: vec![
            TextBlock::new(&settings.title, FontRole::Title, 80, colours.text)
                .with_shadow(Shadow::beneath(colours.text, 2, 2, 100)),
            TextBlock::new(&settings.instruction, FontRole::Body, 150, colours.text)
                .with_shadow(Shadow::beneath(colours.text, 1, 2, 80)),
        ],
        icons: [icon(150), icon(400)],
        arrow: ArrowSpec::Glyph(TextBlock::new("→", FontRole::Symbol, 220, colours.text)),
    }
}

fn modern_scene(settings: &Settings) -> Scene {
    let (w, h) = (settings.width as i32, settings.height as i32);
    let colours = &settings.colours;
    let lavender = Colour::rgb(147, 112, 219);
    let cornflower = Colour::rgb(100, 149, 237);

    let icon = |x: i32, radius: u32, label: &str| IconPlaceholder {
        origin: Point::new(x, 220),
        size: 80,
        radius,
        fill: Colour::rgb(240, 240, 245),
        outline: Colour::rgb(200, 200, 210),
        outline_width: 1,
        label: Some(label.to_string()),
        label_colour: colours.text,
    };

    Scene {
        width: settings.width,
        height: settings.height,
        gradient: GradientSpec::vertical(colours.gradient_start, colours.gradient_end),
        overlays: vec![
            OverlayShape::ellipse(corner_box((-100, -100), (100, 100)), lavender.with_alpha(15)),
            OverlayShape::ellipse(
                corner_box((w - 80, h - 80), (w + 80, h + 80)),
                lavender.with_alpha(10),
            ),
            OverlayShape::ellipse(corner_box((w - 150, 50), (w - 50, 150)), cornflower.with_alpha(10)),
        ],
        texts: vec![
            TextBlock::new(&settings.title, FontRole::Title, 90, colours.text),
            TextBlock::new(&settings.instruction, FontRole::Body, 145, colours.secondary),
        ],
        icons: [icon(180, 18, &settings.app_name), icon(340, 15, "Apps")],
        arrow: ArrowSpec::Geometric(ArrowStyle {
            colour: colours.secondary,
            line_width: 2,
            head_length: 10,
            head_half_width: 8,
            gap: 20,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackgroundConfig;

    fn settings(style: Style) -> Settings {
        let config = BackgroundConfig {
            style: Some(style),
            ..Default::default()
        };
        Settings::from_config(&config).unwrap()
    }

    #[test]
    fn test_classic_scene() {
        let scene = settings(Style::Classic).scene();

        assert_eq!((scene.width, scene.height), (600, 400));
        assert_eq!(scene.gradient.start, Colour::rgb(118, 75, 162));
        assert_eq!(scene.overlays.len(), 3);
        assert_eq!(scene.texts[0].text, "Install Phim");
        assert_eq!(scene.texts[0].shadow.unwrap().colour, Colour::new(0, 0, 0, 100));
        assert_eq!(scene.texts[1].shadow.unwrap().offset, Point::new(1, 2));
        assert_eq!(scene.icons[1].origin, Point::new(400, 200));
        assert!(matches!(scene.arrow, ArrowSpec::Glyph(ref b) if b.text == "→"));
    }

    #[test]
    fn test_modern_scene() {
        let scene = settings(Style::Modern).scene();

        assert_eq!(scene.gradient.end, Colour::grey(250));
        assert!(scene.texts.iter().all(|t| t.shadow.is_none()));
        assert_eq!(scene.icons[0].label.as_deref(), Some("Phim"));
        assert_eq!(scene.icons[1].label.as_deref(), Some("Apps"));
        assert_eq!(scene.icons[0].radius, 18);
        assert!(matches!(scene.arrow, ArrowSpec::Geometric(ref a) if a.gap == 20));
    }

    #[test]
    fn test_corner_accents_follow_canvas_size() {
        let config = BackgroundConfig {
            style: Some(Style::Modern),
            width: Some(800),
            height: Some(500),
            ..Default::default()
        };
        let scene = Settings::from_config(&config).unwrap().scene();

        let crate::types::OverlayGeometry::Ellipse(bounds) = &scene.overlays[1].geometry else {
            panic!("expected ellipse");
        };
        assert_eq!(bounds.min, Point::new(720, 420));
        assert_eq!(bounds.max, Point::new(880, 580));
    }

    #[test]
    fn test_style_defaults() {
        assert_eq!(Style::default(), Style::Modern);
        assert_eq!(Style::Modern.default_dpi(), Some(144));
        assert_eq!(Style::Classic.default_dpi(), None);
        assert_eq!(Style::Classic.font_size(FontRole::Title), 48.0);
        assert_eq!(Style::Modern.font_requests().len(), 4);
        assert_eq!(
            Style::Modern.font_candidates()[2],
            PathBuf::from("/System/Library/Fonts/Helvetica.ttc")
        );
    }
}
