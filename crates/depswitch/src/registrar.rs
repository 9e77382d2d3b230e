//! Attaching resolved dependencies to build configurations
//!
//! A [`DependencyRegistrar`] is the build system's dependency-declaration
//! surface. Resolution hands it a [`ResolvedDependency`] and the name of a
//! build configuration ("compile", "runtime", ...) and never looks at what
//! the registrar does with it.

use crate::resolver::{LocalKind, ModuleResolver, ResolvedDependency};
use serde::Serialize;

/// Receives resolved dependencies
pub trait DependencyRegistrar {
    fn register(&mut self, configuration: &str, dependency: ResolvedDependency);
}

impl<R: DependencyRegistrar + ?Sized> DependencyRegistrar for &mut R {
    fn register(&mut self, configuration: &str, dependency: ResolvedDependency) {
        (**self).register(configuration, dependency)
    }
}

/// One registered dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub configuration: String,
    #[serde(flatten)]
    pub dependency: ResolvedDependency,
}

impl Registration {
    /// Gradle-style declaration line
    ///
    /// ```text
    /// compile project(':Libraries:Core')
    /// compile files('libs/foo.jar')
    /// compile 'com.example:Net:+'
    /// ```
    pub fn declaration(&self) -> String {
        match &self.dependency {
            ResolvedDependency::Local {
                path,
                kind: LocalKind::Module,
            } => format!("{} project('{}')", self.configuration, path),
            ResolvedDependency::Local {
                path,
                kind: LocalKind::File,
            } => format!("{} files('{}')", self.configuration, path),
            ResolvedDependency::Remote { coordinate } => {
                format!("{} '{}'", self.configuration, coordinate)
            }
        }
    }
}

/// Registrar that records registrations in call order
#[derive(Debug, Clone, Default)]
pub struct DependencyList {
    entries: Vec<Registration>,
}

impl DependencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Registration] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registrations attached to one configuration
    pub fn for_configuration<'a>(
        &'a self,
        configuration: &'a str,
    ) -> impl Iterator<Item = &'a ResolvedDependency> + 'a {
        self.entries
            .iter()
            .filter(move |r| r.configuration == configuration)
            .map(|r| &r.dependency)
    }

    /// One declaration line per registration
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.declaration());
            out.push('\n');
        }
        out
    }
}

impl DependencyRegistrar for DependencyList {
    fn register(&mut self, configuration: &str, dependency: ResolvedDependency) {
        self.entries.push(Registration {
            configuration: configuration.to_string(),
            dependency,
        });
    }
}

/// Resolves names and hands the results to a registrar
pub struct Declarer<'r, R> {
    resolver: &'r ModuleResolver,
    registrar: R,
}

impl<'r, R: DependencyRegistrar> Declarer<'r, R> {
    pub fn new(resolver: &'r ModuleResolver, registrar: R) -> Self {
        Self {
            resolver,
            registrar,
        }
    }

    /// Add a module to the default configuration
    pub fn compile(&mut self, name: &str) -> ResolvedDependency {
        let resolver = self.resolver;
        self.add(resolver.config().default_configuration(), name, None)
    }

    /// Add several modules to the default configuration, in order
    pub fn compile_all<'n, I>(&mut self, names: I) -> Vec<ResolvedDependency>
    where
        I: IntoIterator<Item = &'n str>,
    {
        names.into_iter().map(|name| self.compile(name)).collect()
    }

    /// Add a module to `configuration`
    pub fn add(
        &mut self,
        configuration: &str,
        name: &str,
        coordinate: Option<&str>,
    ) -> ResolvedDependency {
        let resolved = self.resolver.resolve_module(name, coordinate);
        self.registrar.register(configuration, resolved.clone());
        resolved
    }

    /// Add a prebuilt artifact to `configuration`
    pub fn add_artifact(
        &mut self,
        configuration: &str,
        base_name: &str,
        coordinate: Option<&str>,
    ) -> ResolvedDependency {
        let resolved = self.resolver.resolve_artifact(base_name, coordinate);
        self.registrar.register(configuration, resolved.clone());
        resolved
    }

    pub fn registrar(&self) -> &R {
        &self.registrar
    }

    pub fn into_registrar(self) -> R {
        self.registrar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::manifest::WorkspaceModules;

    fn resolver() -> ModuleResolver {
        ModuleResolver::from_parts(
            Config::new("com.example").unwrap(),
            WorkspaceModules::parse("include ':Libraries:Core'"),
            ["foo.jar".to_string()].into_iter().collect(),
        )
    }

    #[test]
    fn test_declarations() {
        let resolver = resolver();
        let mut declarer = Declarer::new(&resolver, DependencyList::new());

        declarer.compile("Core");
        declarer.add_artifact("runtime", "foo", None);
        declarer.add("compile", "Net", Some("com.other:net:1.0"));

        let list = declarer.into_registrar();
        assert_eq!(
            list.render(),
            "compile project(':Libraries:Core')\n\
             runtime files('libs/foo.jar')\n\
             compile 'com.other:net:1.0'\n"
        );
    }

    #[test]
    fn test_compile_all_keeps_order() {
        let resolver = resolver();
        let mut list = DependencyList::new();
        let mut declarer = Declarer::new(&resolver, &mut list);

        declarer.compile_all(["Net", "Core", "Auth"]);

        let refs: Vec<&str> = list.entries().iter().map(|r| r.dependency.reference()).collect();
        assert_eq!(
            refs,
            vec!["com.example:Net:+", ":Libraries:Core", "com.example:Auth:+"]
        );
    }

    #[test]
    fn test_for_configuration() {
        let resolver = resolver();
        let mut declarer = Declarer::new(&resolver, DependencyList::new());
        declarer.compile("Core");
        declarer.add_artifact("runtime", "foo", None);

        let list = declarer.into_registrar();
        assert_eq!(list.for_configuration("runtime").count(), 1);
        assert_eq!(list.for_configuration("compile").count(), 1);
        assert_eq!(list.for_configuration("test").count(), 0);
    }
}
