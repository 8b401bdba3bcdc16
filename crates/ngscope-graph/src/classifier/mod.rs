//! Declaration classifier.
//!
//! Walks the top-level statements of one parsed file and extracts:
//!
//! - decorated classes, classified as component, service, module or pipe
//! - routing tables (`[{ path, component }]` literals)
//! - external import specifiers
//!
//! Only top-level statements are inspected. Classes nested in functions or
//! namespaces are not part of the structural map.

mod imports;
mod metadata;
mod routes;

pub use imports::{collect_external_imports, is_relative_specifier};
pub use metadata::{ComponentMetadata, strip_quotes};
pub use routes::collect_routes;

use std::path::Path;

use oxc_ast::ast::{
    Class, Declaration as AstDeclaration, ExportDefaultDeclarationKind, Program, Statement,
};
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::registry::{ComponentRecord, PipeRecord, RouteEntry};

/// The closed set of structural roles a decorated class can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Component,
    Service,
    Module,
    Pipe,
}

impl DeclarationKind {
    /// Annotation prefixes in match priority order.
    const PREFIXES: [(&'static str, DeclarationKind); 4] = [
        ("Component", DeclarationKind::Component),
        ("Injectable", DeclarationKind::Service),
        ("NgModule", DeclarationKind::Module),
        ("Pipe", DeclarationKind::Pipe),
    ];

    /// Classify an annotation by the source text of its expression,
    /// e.g. `Component({ ... })` or `Injectable()`.
    pub fn from_annotation(text: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix))
            .map(|(_, kind)| *kind)
    }

    /// Name recorded for an anonymous class of this kind.
    pub fn placeholder_name(self) -> &'static str {
        match self {
            DeclarationKind::Component => "UnnamedComponent",
            DeclarationKind::Service => "UnnamedService",
            DeclarationKind::Module => "UnnamedModule",
            DeclarationKind::Pipe => "UnnamedPipe",
        }
    }
}

/// One classified class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Component(ComponentRecord),
    Service(String),
    Module(String),
    Pipe(PipeRecord),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Component(_) => DeclarationKind::Component,
            Declaration::Service(_) => DeclarationKind::Service,
            Declaration::Module(_) => DeclarationKind::Module,
            Declaration::Pipe(_) => DeclarationKind::Pipe,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Component(record) => &record.name,
            Declaration::Service(name) | Declaration::Module(name) => name,
            Declaration::Pipe(record) => &record.name,
        }
    }
}

/// Everything extracted from a single file. Owns plain strings only, so the
/// syntax tree can be dropped as soon as this is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFacts {
    pub declarations: Vec<Declaration>,
    pub routes: Vec<RouteEntry>,
    pub dependencies: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify every top-level declaration of a parsed program.
pub fn classify_program(program: &Program<'_>, source_text: &str, path: &Path) -> FileFacts {
    let mut facts = FileFacts::default();

    for stmt in &program.body {
        let class = match stmt {
            Statement::ClassDeclaration(class) => Some(&**class),
            Statement::ExportNamedDeclaration(named) => match &named.declaration {
                Some(AstDeclaration::ClassDeclaration(class)) => Some(&**class),
                _ => None,
            },
            Statement::ExportDefaultDeclaration(default) => match &default.declaration {
                ExportDefaultDeclarationKind::ClassDeclaration(class) => Some(&**class),
                _ => None,
            },
            _ => None,
        };

        if let Some(class) = class {
            if let Some(declaration) =
                classify_class(class, source_text, path, &mut facts.diagnostics)
            {
                facts.declarations.push(declaration);
            }
        }
    }

    facts.routes = collect_routes(program, source_text);
    facts.dependencies = collect_external_imports(program);
    facts
}

/// Classify one class by the first decorator that names a known kind.
pub fn classify_class(
    class: &Class<'_>,
    source_text: &str,
    path: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Declaration> {
    let (decorator, kind) = class.decorators.iter().find_map(|decorator| {
        let text = decorator.expression.span().source_text(source_text);
        DeclarationKind::from_annotation(text).map(|kind| (decorator, kind))
    })?;

    let name = class
        .id
        .as_ref()
        .map(|id| id.name.to_string())
        .unwrap_or_else(|| kind.placeholder_name().to_string());

    let declaration = match kind {
        DeclarationKind::Component => {
            let metadata = match ComponentMetadata::from_decorator(decorator, source_text) {
                Ok(metadata) => metadata,
                Err(reason) => {
                    diagnostics.push(Diagnostic::malformed_metadata(
                        path,
                        format!("@Component on '{name}': {reason}"),
                    ));
                    ComponentMetadata::default()
                }
            };
            Declaration::Component(ComponentRecord::new(
                name,
                path,
                metadata.selector,
                metadata.template,
            ))
        }
        DeclarationKind::Service => Declaration::Service(name),
        DeclarationKind::Module => Declaration::Module(name),
        DeclarationKind::Pipe => Declaration::Pipe(PipeRecord {
            name,
            file_path: path.to_path_buf(),
        }),
    };

    Some(declaration)
}
