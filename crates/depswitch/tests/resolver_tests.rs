//! Integration tests for dependency source resolution

use depswitch::{
    Config, Coordinate, LocalArtifacts, LocalKind, ModuleResolver, ResolvedDependency,
    VersionSpec, WorkspaceModules,
};

fn config() -> Config {
    Config::new("com.example").unwrap()
}

fn create_resolver(manifest: &str, jars: &[&str]) -> ModuleResolver {
    ModuleResolver::from_parts(
        config(),
        WorkspaceModules::parse(manifest),
        jars.iter().map(|j| j.to_string()).collect::<LocalArtifacts>(),
    )
}

#[test]
fn test_declared_modules_resolve_locally() {
    let resolver = create_resolver(
        "include ':Libraries:Core', ':Libraries:Net'\ninclude ':Libraries:Auth'",
        &[],
    );

    for name in ["Core", "Net", "Auth"] {
        assert_eq!(
            resolver.resolve_module(name, None),
            ResolvedDependency::Local {
                path: format!(":Libraries:{}", name),
                kind: LocalKind::Module,
            }
        );
    }
}

#[test]
fn test_undeclared_modules_resolve_remotely() {
    let resolver = create_resolver("include ':Libraries:Core'", &[]);

    for name in ["Net", "Auth", "core"] {
        assert!(resolver.resolve_module(name, None).is_remote(), "{}", name);
    }
}

#[test]
fn test_module_outside_library_dir_needs_qualified_name() {
    let resolver = create_resolver("include ':app'", &[]);

    assert!(resolver.resolve_module("app", None).is_remote());
    assert_eq!(resolver.resolve_module(":app", None).reference(), ":app");
}

#[test]
fn test_commented_module_resolves_remotely() {
    let resolver = create_resolver("// include ':Libraries:Core'\n// 'Core'", &[]);

    assert_eq!(
        resolver.resolve_module("Core", None),
        ResolvedDependency::Remote {
            coordinate: "com.example:Core:+".to_string(),
        }
    );
}

#[test]
fn test_local_precedence_over_explicit_coordinate() {
    let resolver = create_resolver("include ':Libraries:Core'", &[]);

    let resolved = resolver.resolve_module("Core", Some("com.elsewhere:core:9.9.9"));
    assert_eq!(resolved.reference(), ":Libraries:Core");
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = create_resolver("include ':Libraries:Core'", &["foo.jar"]);

    for name in ["Core", "Net"] {
        assert_eq!(
            resolver.resolve_module(name, None),
            resolver.resolve_module(name, None)
        );
    }
    assert_eq!(
        resolver.resolve_artifact("foo", None),
        resolver.resolve_artifact("foo", None)
    );
    assert_eq!(
        resolver.resolve_artifact("bar", Some("com.x:bar:1.0")),
        resolver.resolve_artifact("bar", Some("com.x:bar:1.0"))
    );
}

#[test]
fn test_synthesized_coordinates_follow_grammar() {
    let config = Config::new("com.example")
        .unwrap()
        .with_artifact_suffix("@aar")
        .unwrap();
    let resolver =
        ModuleResolver::from_parts(config, WorkspaceModules::default(), LocalArtifacts::default());

    for name in ["Core", "net-utils", ":Libraries:Deep", "a_b", "Core:", ":Libraries:"] {
        let resolved = resolver.resolve_module(name, None);
        let coordinate = Coordinate::parse(resolved.reference()).unwrap();

        assert_eq!(coordinate.group, "com.example");
        assert!(!coordinate.artifact.is_empty());
        assert_eq!(coordinate.version, VersionSpec::Latest);
        assert_eq!(coordinate.suffix, "@aar");
    }
}

#[test]
fn test_batch_matches_individual_resolution() {
    let resolver = create_resolver("include ':Libraries:Core'", &[]);
    let names = ["Net", "Core", "Net", "Auth"];

    let batch = resolver.resolve_modules(names);
    let individual: Vec<ResolvedDependency> = names
        .iter()
        .map(|name| resolver.resolve_module(name, None))
        .collect();

    assert_eq!(batch, individual);
}

#[test]
fn test_artifact_remote_with_explicit_coordinate() {
    let resolver = create_resolver("", &[]);

    assert_eq!(
        resolver.resolve_artifact("foo", Some("com.x:foo:1.0")),
        ResolvedDependency::Remote {
            coordinate: "com.x:foo:1.0".to_string(),
        }
    );
}

#[test]
fn test_artifact_without_coordinate_is_empty_remote() {
    let resolver = create_resolver("", &[]);

    let resolved = resolver.resolve_artifact("foo", None);
    assert!(resolved.is_remote());
    assert_eq!(resolved.reference(), "");
}

#[test]
fn test_artifact_match_requires_extension() {
    let resolver = create_resolver("", &["foo.jar"]);

    assert!(resolver.resolve_artifact("foo.jar", None).is_remote());
    assert!(resolver.resolve_artifact("fo", None).is_remote());
}
