//! Now command - read the time through a nested dependent.

use crate::app::{for_profile, AType};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use console::style;
use corridor_core::{with_context, Profile};
use serde::Serialize;

#[derive(Serialize)]
struct NowReport {
    profile: Profile,
    now: DateTime<Utc>,
}

/// Print `AType.nested.now` under the given profile.
pub fn run(profile: Profile, format: &str) -> Result<()> {
    let root = with_context(AType::default(), for_profile(profile));
    let nested = root.nested();

    let report = NowReport {
        profile: nested.profile(),
        now: nested.now(),
    };

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
        "text" => {
            println!("Now is {} ({})", style(report.now).cyan(), report.profile);
        }
        _ => {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'text'.", format);
        }
    }

    Ok(())
}
