//! `depswitch artifact`: Resolve a prebuilt library file.

use crate::output::StyledOutput;
use depswitch::ModuleResolver;

pub fn execute(
    resolver: &ModuleResolver,
    name: &str,
    coordinate: Option<&str>,
    json: bool,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    let resolved = resolver.resolve_artifact(name, coordinate);
    super::print_resolved(&[(name, resolved)], json, out)
}
