//! Static command - swap the process-wide context of a singleton dependent.

use crate::app::{for_profile, AType, StaticType};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use console::style;
use corridor_core::{with_context, with_static_context, Profile};
use serde::Serialize;

#[derive(Serialize)]
struct StaticReport {
    before: Profile,
    after: Profile,
    now: DateTime<Utc>,
}

/// Rebind `StaticType` to `profile`, either directly or by resolving it
/// through a parent bound to that profile.
pub fn run(profile: Profile, via_parent: bool, format: &str) -> Result<()> {
    let before = StaticType::profile();

    if via_parent {
        with_context(AType::default(), for_profile(profile)).shared();
    } else {
        with_static_context::<StaticType>(for_profile(profile));
    }

    let nested = StaticType::nested();
    let report = StaticReport {
        before,
        after: nested.profile(),
        now: nested.now(),
    };

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
        "text" => {
            println!("StaticType context: {} -> {}", report.before, style(report.after).cyan());
            println!("StaticType.nested.now: {}", report.now);
        }
        _ => {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'text'.", format);
        }
    }

    Ok(())
}
