//! Nested command - show that a child observes its parent's context.

use crate::app::{for_profile, AType};
use anyhow::{Context, Result};
use console::style;
use corridor_core::{with_context, HasContext, Profile};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct NestedReport {
    parent: Profile,
    child: Profile,
    shares_context: bool,
}

/// Resolve `nested` from a root bound to `profile` and compare contexts.
pub fn run(profile: Profile, format: &str) -> Result<()> {
    let root = with_context(AType::default(), for_profile(profile));
    let child = root.nested();

    let report = NestedReport {
        parent: profile,
        child: child.profile(),
        shares_context: Arc::ptr_eq(root.resolver().context(), child.resolver().context()),
    };

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
        "text" => {
            println!("{}", style("Context propagation:").bold());
            println!("  Parent: {}", report.parent);
            println!("  Child:  {}", report.child);
            if report.shares_context {
                println!("  {} child shares the parent's context", style("✓").green());
            } else {
                println!("  {} child holds a different context", style("×").red());
            }
        }
        _ => {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'text'.", format);
        }
    }

    Ok(())
}
