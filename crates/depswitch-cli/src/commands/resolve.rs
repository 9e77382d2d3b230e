//! `depswitch resolve`: Resolve module names.

use crate::output::StyledOutput;
use depswitch::ModuleResolver;

pub fn execute(
    resolver: &ModuleResolver,
    names: &[String],
    coordinate: Option<&str>,
    json: bool,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    if coordinate.is_some() && names.len() > 1 {
        anyhow::bail!("--coordinate can only be used when resolving a single name");
    }

    let resolved: Vec<_> = match coordinate {
        Some(coordinate) => names
            .iter()
            .map(|name| (name.as_str(), resolver.resolve_module(name, Some(coordinate))))
            .collect(),
        None => names
            .iter()
            .map(String::as_str)
            .zip(resolver.resolve_modules(names.iter().map(String::as_str)))
            .collect(),
    };

    super::print_resolved(&resolved, json, out)
}
