//! Api command - run the endpoint pipeline through a dashboard.

use crate::app::{for_profile, Dashboard};
use anyhow::{Context, Result};
use console::style;
use corridor_core::{with_context, Profile};
use serde::Serialize;

#[derive(Serialize)]
struct ApiReport {
    profile: Profile,
    messages: Vec<String>,
    address: String,
}

/// Resolve the first user's address endpoint under `profile`.
pub fn run(profile: Profile, format: &str) -> Result<()> {
    let dashboard = with_context(Dashboard::default(), for_profile(profile));

    let address = dashboard.load_address();

    let report = ApiReport {
        profile,
        messages: dashboard.messages(),
        address: address.value().clone(),
    };

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
        "text" => {
            for message in &report.messages {
                println!("{}", message);
            }
            address.on_success(|s| println!("{}", style(s).bold()));
        }
        _ => {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'text'.", format);
        }
    }

    Ok(())
}
