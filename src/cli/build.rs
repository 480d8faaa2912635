//! Build command implementation.
//!
//! Resolves settings from presets, `dmgbg.yaml` and flags, then renders
//! and writes the background PNG.

use std::path::{Path, PathBuf};

use clap::Args;

use super::SettingsArgs;
use crate::compose::{generate, Generated};
use crate::config::BackgroundConfig;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// Render the background image
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output PNG path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Resolution metadata written into the PNG
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Headline text
    #[arg(long)]
    pub title: Option<String>,

    /// Instruction line under the headline
    #[arg(long)]
    pub instruction: Option<String>,

    /// Product name used in the default texts and icon label
    #[arg(long)]
    pub app_name: Option<String>,

    /// Print font resolution and stage details
    #[arg(long, short)]
    pub verbose: bool,
}

impl BuildArgs {
    fn flags(&self) -> BackgroundConfig {
        BackgroundConfig {
            output: self.output.clone(),
            dpi: self.dpi,
            title: self.title.clone(),
            instruction: self.instruction.clone(),
            app_name: self.app_name.clone(),
            ..Default::default()
        }
    }
}

pub fn run(args: BuildArgs) -> Result<()> {
    let printer = Printer::new().verbose(args.verbose);
    let cwd = std::env::current_dir()?;
    execute(&args, &cwd, &printer)?;
    Ok(())
}

/// Build with `dir` as the directory searched for `dmgbg.yaml`.
pub fn execute(args: &BuildArgs, dir: &Path, printer: &Printer) -> Result<Generated> {
    let settings = args.settings.settings_in(dir, args.flags())?;
    let generated = generate(&settings, printer)?;

    if generated.builtin_font && !args.settings.builtin_font {
        printer.warning(
            "Warning",
            "no font file could be loaded for some text; using the built-in face",
        );
    }

    let dpi = generated
        .dpi
        .map(|d| format!(", {} dpi", d))
        .unwrap_or_default();
    printer.success(
        "Created",
        &format!(
            "{} {}",
            display_path(&generated.path),
            printer.dim(&format!("({}x{}{})", generated.width, generated.height, dpi))
        ),
    );

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BgError;
    use std::fs;
    use tempfile::tempdir;

    fn args(output: PathBuf) -> BuildArgs {
        BuildArgs {
            settings: SettingsArgs {
                builtin_font: true,
                ..Default::default()
            },
            output: Some(output),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_default_scene() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("dmg-assets/dmg-background.png");

        let generated = execute(&args(output.clone()), dir.path(), &Printer::new()).unwrap();

        assert_eq!(generated.path, output);
        let img = image::open(&output).unwrap();
        assert_eq!((img.width(), img.height()), (600, 400));
        assert_eq!(img.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_build_reads_config_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("from-config.png");
        fs::write(
            dir.path().join("dmgbg.yaml"),
            format!("style: classic\nwidth: 320\nheight: 200\noutput: {}\n", output.display()),
        )
        .unwrap();

        let build = BuildArgs {
            settings: SettingsArgs {
                builtin_font: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let generated = execute(&build, dir.path(), &Printer::new()).unwrap();

        assert_eq!(generated.path, output);
        assert_eq!((generated.width, generated.height), (320, 200));
        assert_eq!(generated.dpi, None);
        assert!(output.exists());
    }

    #[test]
    fn test_build_with_custom_texts() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("bg.png");
        let build = BuildArgs {
            title: Some("Install Widget Pro".to_string()),
            app_name: Some("Widget".to_string()),
            dpi: Some(72),
            ..args(output.clone())
        };

        let generated = execute(&build, dir.path(), &Printer::new().verbose(true)).unwrap();
        assert_eq!(generated.dpi, Some(72));
        assert!(fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_build_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dmgbg.yaml"), "width: 0\n").unwrap();

        let result = execute(&args(dir.path().join("bg.png")), dir.path(), &Printer::new());
        assert!(matches!(result, Err(BgError::Config { .. })));
        assert!(!dir.path().join("bg.png").exists());
    }

    #[test]
    fn test_build_unwritable_output_is_io_error() {
        let dir = tempdir().unwrap();
        // a regular file where the output directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = execute(&args(blocker.join("bg.png")), dir.path(), &Printer::new());
        assert!(matches!(result, Err(BgError::Io { .. })));
    }
}
