//! `depswitch config`: Show the effective configuration.

use crate::output::StyledOutput;
use depswitch::Config;
use std::path::Path;

pub fn execute(root: &Path, config: &Config, out: &mut StyledOutput) -> anyhow::Result<()> {
    out.heading(&format!("# workspace: {}", root.display()));
    out.plain(&toml::to_string_pretty(config)?);
    Ok(())
}
