//! `depswitch declare`: Print build declarations.

use crate::output::StyledOutput;
use depswitch::{Declarer, DependencyList, ModuleResolver};

pub fn execute(
    resolver: &ModuleResolver,
    names: &[String],
    artifacts: &[String],
    configuration: Option<&str>,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    if names.is_empty() && artifacts.is_empty() {
        anyhow::bail!("Nothing to declare: pass module names or --artifact <name>");
    }

    let configuration = configuration.unwrap_or(resolver.config().default_configuration());
    let mut declarer = Declarer::new(resolver, DependencyList::new());

    for name in names {
        declarer.add(configuration, name, None);
    }
    for artifact in artifacts {
        declarer.add_artifact(configuration, artifact, None);
    }

    out.plain(&declarer.into_registrar().render());
    Ok(())
}
