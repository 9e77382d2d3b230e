//! CLI command implementations.

pub mod artifact;
pub mod artifacts;
pub mod config;
pub mod declare;
pub mod modules;
pub mod resolve;

use crate::output::StyledOutput;
use depswitch::ResolvedDependency;

/// Print resolution results as text or as a JSON array.
pub(crate) fn print_resolved(
    resolved: &[(&str, ResolvedDependency)],
    json: bool,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    if json {
        let mut entries = Vec::with_capacity(resolved.len());
        for (name, dependency) in resolved {
            let mut value = serde_json::to_value(dependency)?;
            if let Some(map) = value.as_object_mut() {
                map.insert("name".to_string(), (*name).into());
            }
            entries.push(value);
        }
        out.line(&serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = resolved.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, dependency) in resolved {
        out.resolution(name, width, dependency);
    }
    Ok(())
}
