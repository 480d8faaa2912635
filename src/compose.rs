//! The generation pipeline.
//!
//! Canvas → gradient → overlays → text → icons → arrow → PNG. Stages run
//! in that fixed order against one canvas; fonts are resolved once up
//! front and shared by every text stage.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::fonts::{FontSet, FontSource};
use crate::output::{display_path, Printer};
use crate::render::{
    composite_overlays, draw_arrow, draw_centred, draw_icon, paint_gradient, write_png,
    ArrowGeometry, Canvas,
};
use crate::types::{ArrowSpec, FontRole, Scene};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub dpi: Option<u32>,
    /// True when at least one role fell back to the built-in face.
    pub builtin_font: bool,
}

/// Draw a scene onto a fresh canvas.
pub fn render_scene(scene: &Scene, fonts: &FontSet) -> Result<Canvas> {
    let mut canvas = Canvas::new(scene.width, scene.height, scene.gradient.start);

    paint_gradient(&mut canvas, &scene.gradient);
    composite_overlays(&mut canvas, &scene.overlays)?;

    for block in &scene.texts {
        draw_centred(&mut canvas, fonts.get(block.role), block)?;
    }

    let label_font = fonts.get(FontRole::Small);
    for icon in &scene.icons {
        draw_icon(&mut canvas, icon, label_font)?;
    }

    match &scene.arrow {
        ArrowSpec::Glyph(block) => {
            draw_centred(&mut canvas, fonts.get(block.role), block)?;
        }
        ArrowSpec::Geometric(style) => {
            let [from, to] = &scene.icons;
            let geometry = ArrowGeometry::between(from, to, style);
            draw_arrow(&mut canvas, &geometry, style)?;
        }
    }

    Ok(canvas)
}

/// Resolve fonts, render the configured scene and write it out.
pub fn generate(settings: &Settings, printer: &Printer) -> Result<Generated> {
    let fonts = FontSet::resolve(&settings.fonts);
    for report in fonts.reports() {
        let source = match &report.source {
            FontSource::File(path) => display_path(path),
            FontSource::Builtin => "built-in".to_string(),
        };
        printer.detail(
            "Font",
            &format!("{} {}pt -> {}", report.role.name(), report.size, source),
        );
    }
    let scene = settings.scene();
    printer.status(
        "Rendering",
        &format!(
            "{} background ({}x{})",
            settings.style.name(),
            settings.width,
            settings.height
        ),
    );
    printer.detail(
        "Scene",
        &format!(
            "{} overlays, {} text blocks, {} icons",
            scene.overlays.len(),
            scene.texts.len(),
            scene.icons.len()
        ),
    );
    let canvas = render_scene(&scene, &fonts)?;

    write_png(&canvas, &settings.output, settings.dpi)?;

    Ok(Generated {
        path: settings.output.clone(),
        width: canvas.width(),
        height: canvas.height(),
        dpi: settings.dpi,
        builtin_font: fonts.uses_builtin(),
    })
}
