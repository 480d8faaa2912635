//! Init command implementation.
//!
//! Writes a starter `dmgbg.yaml` holding the chosen style's defaults.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::CONFIG_FILENAME;
use crate::error::{BgError, Result};
use crate::output::{display_path, Printer};
use crate::style::{Style, DEFAULT_APP_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Write a starter dmgbg.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Style preset to start from
    #[arg(long, value_enum, default_value_t = Style::default())]
    pub style: Style,

    /// Overwrite an existing dmgbg.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(BgError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| BgError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    fs::write(&config_path, template(args.style)).map_err(|e| BgError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success(
        "Created",
        &format!("{} ({} style)", display_path(&config_path), args.style.name()),
    );

    Ok(())
}

/// Build YAML manually so the optional keys can stay as comments.
fn template(style: Style) -> String {
    let colours = style.colours();
    let dpi = match style.default_dpi() {
        Some(dpi) => format!("dpi: {}", dpi),
        None => "# dpi: 144".to_string(),
    };

    let mut yaml = String::new();
    yaml.push_str("# dmgbg configuration\n");
    yaml.push_str(&format!("style: {}\n", style.name()));
    yaml.push_str(&format!("output: {}\n", style.default_output().display()));
    yaml.push_str(&format!("{}\n", dpi));
    yaml.push_str(&format!("width: {}\n", DEFAULT_WIDTH));
    yaml.push_str(&format!("height: {}\n", DEFAULT_HEIGHT));
    yaml.push('\n');
    yaml.push_str(&format!("app_name: {}\n", DEFAULT_APP_NAME));
    yaml.push_str(&format!("# title: Install {}\n", DEFAULT_APP_NAME));
    yaml.push_str(&format!(
        "# instruction: Drag {} to your Applications folder\n",
        DEFAULT_APP_NAME
    ));
    yaml.push('\n');
    yaml.push_str("colours:\n");
    yaml.push_str(&format!("  gradient_start: \"{}\"\n", colours.gradient_start));
    yaml.push_str(&format!("  gradient_end: \"{}\"\n", colours.gradient_end));
    yaml.push_str(&format!("  text: \"{}\"\n", colours.text));
    yaml.push_str(&format!("  secondary: \"{}\"\n", colours.secondary));
    yaml.push('\n');
    yaml.push_str("# fonts:\n");
    yaml.push_str("#   candidates:\n");
    yaml.push_str("#     - /Library/Fonts/MyFont.otf\n");
    yaml.push_str("#   title:\n");
    yaml.push_str(&format!("#     size: {}\n", style.font_size(crate::types::FontRole::Title)));
    yaml
}
