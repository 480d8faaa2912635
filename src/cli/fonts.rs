//! Fonts command implementation.
//!
//! Resolves every text role the way a build would and reports the outcome.

use std::io::{self, Write};

use clap::Args;

use super::SettingsArgs;
use crate::config::BackgroundConfig;
use crate::error::Result;
use crate::fonts::{FontSet, FontSource, RoleReport};
use crate::output::{display_path, Printer};

/// Show which font file each text role resolves to
#[derive(Args, Debug)]
pub struct FontsArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FontsArgs, printer: &Printer) -> Result<()> {
    let settings = args.settings.settings(BackgroundConfig::default())?;
    let fonts = FontSet::resolve(&settings.fonts);

    if args.json {
        let mut stdout = io::stdout().lock();
        write_json(&mut stdout, fonts.reports())?;
        writeln!(stdout)?;
    } else {
        print_reports(fonts.reports(), printer);
    }

    Ok(())
}

fn write_json<W: Write>(out: W, reports: &[RoleReport]) -> Result<()> {
    serde_json::to_writer_pretty(out, reports).map_err(io::Error::from)?;
    Ok(())
}

fn print_reports(reports: &[RoleReport], printer: &Printer) {
    for report in reports {
        let source = match &report.source {
            FontSource::File(path) => display_path(path),
            FontSource::Builtin => "built-in face".to_string(),
        };
        printer.info(
            report.role.name(),
            &format!("{} {}", source, printer.dim(&format!("({}pt)", report.size))),
        );
        for skipped in &report.skipped {
            printer.info(
                "",
                &printer.dim(&format!(
                    "skipped {}: {}",
                    display_path(&skipped.path),
                    skipped.reason
                )),
            );
        }
    }
}
