pub mod build;
pub mod completions;
pub mod fonts;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{BackgroundConfig, Settings};
use crate::error::Result;
use crate::style::Style;

/// dmgbg - Disk image background generator
#[derive(Parser, Debug)]
#[command(name = "dmgbg")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // running without a subcommand builds with these options
    #[command(flatten)]
    pub build: build::BuildArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the background image
    Build(build::BuildArgs),

    /// Write a starter dmgbg.yaml
    Init(init::InitArgs),

    /// Show which font file each text role resolves to
    Fonts(fonts::FontsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command that resolves settings.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Configuration file (default: ./dmgbg.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Style preset
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Font file to try before the configured candidates (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,

    /// Ignore font files and use the built-in face
    #[arg(long, conflicts_with = "fonts")]
    pub builtin_font: bool,
}

impl SettingsArgs {
    /// Resolve settings relative to the current directory.
    pub fn settings(&self, flags: BackgroundConfig) -> Result<Settings> {
        let cwd = std::env::current_dir()?;
        self.settings_in(&cwd, flags)
    }

    /// Style preset < config file < `flags`, then font flags on top.
    pub fn settings_in(&self, dir: &Path, flags: BackgroundConfig) -> Result<Settings> {
        let file = BackgroundConfig::discover(self.config.as_deref(), dir)?;
        let flags = BackgroundConfig {
            style: self.style.or(flags.style),
            ..flags
        };

        let mut settings = Settings::from_config(&file.merge(flags))?;
        if self.builtin_font {
            settings.builtin_fonts_only();
        } else if !self.fonts.is_empty() {
            settings.prepend_fonts(&self.fonts);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_bare_invocation_parses() {
        let cli = Cli::try_parse_from(["dmgbg"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.build.verbose);
    }

    #[test]
    fn test_bare_invocation_accepts_build_flags() {
        let cli = Cli::try_parse_from(["dmgbg", "--style", "classic", "--dpi", "72"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.build.settings.style, Some(Style::Classic));
        assert_eq!(cli.build.dpi, Some(72));
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["dmgbg", "fonts", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Fonts(ref f)) if f.json));

        let cli = Cli::try_parse_from(["dmgbg", "build", "--font", "a.ttf", "--font", "b.otf"])
            .unwrap();
        let Some(Commands::Build(args)) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.settings.fonts.len(), 2);
    }

    #[test]
    fn test_builtin_font_conflicts_with_font() {
        let result = Cli::try_parse_from(["dmgbg", "--font", "a.ttf", "--builtin-font"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert!(Cli::try_parse_from(["dmgbg", "--style", "baroque"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("dmgbg.yaml"),
            "style: classic\napp_name: Widget\ndpi: 72\n",
        )
        .unwrap();

        let args = SettingsArgs::default();
        let settings = args
            .settings_in(
                dir.path(),
                BackgroundConfig {
                    dpi: Some(300),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(settings.style, Style::Classic);
        assert_eq!(settings.app_name, "Widget");
        assert_eq!(settings.dpi, Some(300));
    }

    #[test]
    fn test_style_flag_keeps_file_values() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dmgbg.yaml"), "style: classic\ntitle: Hello\n").unwrap();

        let args = SettingsArgs {
            style: Some(Style::Modern),
            ..Default::default()
        };
        let settings = args.settings_in(dir.path(), BackgroundConfig::default()).unwrap();

        assert_eq!(settings.style, Style::Modern);
        assert_eq!(settings.title, "Hello");
        assert_eq!(settings.dpi, Some(144));
    }

    #[test]
    fn test_font_flags() {
        let dir = tempdir().unwrap();
        let args = SettingsArgs {
            fonts: vec![PathBuf::from("/fonts/custom.ttf")],
            ..Default::default()
        };
        let settings = args.settings_in(dir.path(), BackgroundConfig::default()).unwrap();
        assert!(settings
            .fonts
            .iter()
            .all(|r| r.candidates[0] == PathBuf::from("/fonts/custom.ttf")));

        let args = SettingsArgs {
            builtin_font: true,
            ..Default::default()
        };
        let settings = args.settings_in(dir.path(), BackgroundConfig::default()).unwrap();
        assert!(settings.fonts.iter().all(|r| r.candidates.is_empty()));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let args = SettingsArgs {
            config: Some(dir.path().join("nope.yaml")),
            ..Default::default()
        };
        assert!(args.settings_in(dir.path(), BackgroundConfig::default()).is_err());
    }
}
