//! `depswitch artifacts`: List prebuilt library files.

use crate::output::StyledOutput;
use depswitch::ModuleResolver;

pub fn execute(resolver: &ModuleResolver, out: &mut StyledOutput) -> anyhow::Result<()> {
    let config = resolver.config();
    let artifacts = resolver.artifacts();
    if artifacts.is_empty() {
        out.warning(&format!(
            "No {} files found in {}/",
            config.artifact_extension(),
            config.libs_dir()
        ));
        return Ok(());
    }

    for file in artifacts.sorted() {
        out.line(&format!("{}/{}", config.libs_dir(), file));
    }
    Ok(())
}
