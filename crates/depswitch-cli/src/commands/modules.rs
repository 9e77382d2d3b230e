//! `depswitch modules`: List workspace modules.

use crate::output::StyledOutput;
use depswitch::ModuleResolver;

pub fn execute(resolver: &ModuleResolver, out: &mut StyledOutput) -> anyhow::Result<()> {
    let modules = resolver.modules();
    if modules.is_empty() {
        out.warning(&format!(
            "No workspace modules found in {}",
            resolver.config().manifest().display()
        ));
        return Ok(());
    }

    for module in modules.sorted() {
        out.line(module);
    }
    Ok(())
}
