//! Targets command implementation

use colored::Colorize;

use loginmsg_core::{BannerTargets, When};

use super::Settings;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Print the banner file behind each selector.
pub fn run_targets(settings: &Settings) -> Result<()> {
    let targets = BannerTargets::new(settings.root.as_path());

    match settings.format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = When::ALL
                .into_iter()
                .map(|when| {
                    let path = targets.resolve(when).to_string();
                    (when.to_string(), serde_json::Value::String(path))
                })
                .collect();
            println!("{}", serde_json::to_string(&map)?);
        }
        OutputFormat::Text => {
            for when in When::ALL {
                let path = targets.resolve(when);
                let marker = if path.is_file() {
                    "present".green()
                } else {
                    "absent".dimmed()
                };
                println!("{:<7} {} ({})", when.to_string().bold(), path.as_str().cyan(), marker);
            }
        }
    }

    Ok(())
}
