//! In-memory registry of everything the classifier discovers.
//!
//! The registry is append-only while files are being classified. Collections
//! are insertion-ordered; re-inserting an existing name replaces the value in
//! place (last write wins) which is an accepted limitation for projects that
//! reuse class names across files.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::{Declaration, FileFacts};

/// A discovered component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    pub file_path: PathBuf,
    /// Empty when the annotation declares no selector.
    pub selector: String,
    /// Inline template text. Empty for `templateUrl` components.
    pub template: String,
    /// Child component names; filled by the resolver only.
    pub children: Vec<String>,
}

impl ComponentRecord {
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        selector: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            selector: selector.into(),
            template: template.into(),
            children: Vec::new(),
        }
    }
}

/// A discovered value-transform pipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeRecord {
    pub name: String,
    pub file_path: PathBuf,
}

/// One `{ path, component }` routing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    /// Raw source text of the component expression; not resolved.
    pub component: String,
}

#[derive(Debug, Default, Clone)]
pub struct Registry {
    components: IndexMap<String, ComponentRecord>,
    services: IndexSet<String>,
    modules: IndexSet<String>,
    pipes: IndexMap<String, PipeRecord>,
    routes: IndexMap<String, String>,
    dependencies: IndexMap<PathBuf, IndexSet<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a component. Returns the record it replaced.
    pub fn upsert_component(&mut self, record: ComponentRecord) -> Option<ComponentRecord> {
        let previous = self.components.insert(record.name.clone(), record);
        if let Some(prev) = &previous {
            tracing::debug!(
                name = %prev.name,
                previous = %prev.file_path.display(),
                "component name redeclared, keeping the later declaration"
            );
        }
        previous
    }

    pub fn add_service(&mut self, name: impl Into<String>) -> bool {
        self.services.insert(name.into())
    }

    pub fn add_module(&mut self, name: impl Into<String>) -> bool {
        self.modules.insert(name.into())
    }

    pub fn upsert_pipe(&mut self, record: PipeRecord) -> Option<PipeRecord> {
        self.pipes.insert(record.name.clone(), record)
    }

    /// Record a route. A later entry for the same path replaces the earlier one.
    pub fn record_route(&mut self, entry: RouteEntry) -> Option<String> {
        self.routes.insert(entry.path, entry.component)
    }

    /// Merge external specifiers into the file's dependency set, creating
    /// the (possibly empty) entry if needed.
    pub fn merge_dependencies<I, S>(&mut self, file_path: impl Into<PathBuf>, specifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies
            .entry(file_path.into())
            .or_default()
            .extend(specifiers.into_iter().map(Into::into));
    }

    pub fn record_declaration(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Component(record) => {
                self.upsert_component(record);
            }
            Declaration::Service(name) => {
                self.add_service(name);
            }
            Declaration::Module(name) => {
                self.add_module(name);
            }
            Declaration::Pipe(record) => {
                self.upsert_pipe(record);
            }
        }
    }

    /// Apply everything extracted from one file.
    pub fn record_file(&mut self, file_path: &Path, facts: FileFacts) {
        for declaration in facts.declarations {
            self.record_declaration(declaration);
        }
        for route in facts.routes {
            self.record_route(route);
        }
        self.merge_dependencies(file_path, facts.dependencies);
    }

    pub fn component(&self, name: &str) -> Option<&ComponentRecord> {
        self.components.get(name)
    }

    pub fn components(&self) -> &IndexMap<String, ComponentRecord> {
        &self.components
    }

    pub fn services(&self) -> &IndexSet<String> {
        &self.services
    }

    pub fn modules(&self) -> &IndexSet<String> {
        &self.modules
    }

    pub fn pipes(&self) -> &IndexMap<String, PipeRecord> {
        &self.pipes
    }

    pub fn routes(&self) -> &IndexMap<String, String> {
        &self.routes
    }

    pub fn dependencies(&self) -> &IndexMap<PathBuf, IndexSet<String>> {
        &self.dependencies
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
            && self.services.is_empty()
            && self.modules.is_empty()
            && self.pipes.is_empty()
            && self.routes.is_empty()
            && self.dependencies.is_empty()
    }

    pub(crate) fn into_parts(self) -> RegistryParts {
        RegistryParts {
            components: self.components,
            services: self.services,
            modules: self.modules,
            pipes: self.pipes,
            routes: self.routes,
            dependencies: self.dependencies,
        }
    }
}

/// Owned registry contents handed to the result assembly step.
pub(crate) struct RegistryParts {
    pub components: IndexMap<String, ComponentRecord>,
    pub services: IndexSet<String>,
    pub modules: IndexSet<String>,
    pub pipes: IndexMap<String, PipeRecord>,
    pub routes: IndexMap<String, String>,
    pub dependencies: IndexMap<PathBuf, IndexSet<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_component_last_write_wins() {
        let mut registry = Registry::new();
        registry.upsert_component(ComponentRecord::new("Foo", "a/foo.ts", "app-a", ""));
        registry.upsert_component(ComponentRecord::new("Bar", "bar.ts", "app-bar", ""));
        let replaced =
            registry.upsert_component(ComponentRecord::new("Foo", "b/foo.ts", "app-b", ""));

        assert_eq!(replaced.map(|r| r.selector), Some("app-a".to_string()));
        assert_eq!(registry.components().len(), 2);

        let foo = registry.component("Foo").unwrap();
        assert_eq!(foo.selector, "app-b");
        assert_eq!(foo.file_path, PathBuf::from("b/foo.ts"));
        // Overwrite keeps the original position.
        assert_eq!(registry.components().get_index_of("Foo"), Some(0));
    }

    #[test]
    fn test_services_and_modules_are_sets() {
        let mut registry = Registry::new();
        assert!(registry.add_service("ApiService"));
        assert!(!registry.add_service("ApiService"));
        assert!(registry.add_module("AppModule"));

        assert_eq!(registry.services().len(), 1);
        assert_eq!(registry.modules().len(), 1);
    }

    #[test]
    fn test_route_with_same_path_is_overwritten() {
        let mut registry = Registry::new();
        registry.record_route(RouteEntry {
            path: "home".into(),
            component: "OldHome".into(),
        });
        let previous = registry.record_route(RouteEntry {
            path: "home".into(),
            component: "NewHome".into(),
        });

        assert_eq!(previous.as_deref(), Some("OldHome"));
        assert_eq!(registry.routes().get("home").map(String::as_str), Some("NewHome"));
    }

    #[test]
    fn test_merge_dependencies_accumulates_per_file() {
        let mut registry = Registry::new();
        registry.merge_dependencies("src/a.ts", ["@angular/core", "rxjs"]);
        registry.merge_dependencies("src/a.ts", ["rxjs", "lodash"]);
        registry.merge_dependencies("src/b.ts", Vec::<String>::new());

        let a = &registry.dependencies()[Path::new("src/a.ts")];
        assert_eq!(
            a.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["@angular/core", "rxjs", "lodash"]
        );
        assert!(registry.dependencies()[Path::new("src/b.ts")].is_empty());
    }

    #[test]
    fn test_record_declaration_dispatches_by_kind() {
        let mut registry = Registry::new();
        registry.record_declaration(Declaration::Service("DataService".into()));
        registry.record_declaration(Declaration::Module("SharedModule".into()));
        registry.record_declaration(Declaration::Pipe(PipeRecord {
            name: "TruncatePipe".into(),
            file_path: "src/truncate.pipe.ts".into(),
        }));
        registry.record_declaration(Declaration::Component(ComponentRecord::new(
            "App", "src/app.ts", "app-root", "",
        )));

        assert!(registry.services().contains("DataService"));
        assert!(registry.modules().contains("SharedModule"));
        assert!(registry.pipes().contains_key("TruncatePipe"));
        assert!(registry.component("App").is_some());
        assert!(!registry.is_empty());
    }
}
