//! Project-level documents: package manifest, compiler configuration and
//! environment files.
//!
//! These are forwarded to the report as-is. Schema problems are never fatal;
//! a document that cannot be used becomes a diagnostic and is left out.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::runtime::Runtime;

const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Dependency-related fields of `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocuments {
    pub package: Option<PackageManifest>,
    /// Raw `tsconfig.json` tree.
    pub compiler_options: Option<serde_json::Value>,
    /// `environment*.ts` file names under `src/environments`.
    pub environments: Vec<String>,
}

impl ProjectDocuments {
    pub async fn load(
        runtime: &dyn Runtime,
        root: &Path,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let package_path = root.join("package.json");
        let package = match read_document(runtime, &package_path, diagnostics).await {
            Some(content) => match PackageManifest::from_json(&content) {
                Ok(manifest) => Some(manifest),
                Err(err) => {
                    diagnostics.push(Diagnostic::parse_failure(
                        &package_path,
                        format!("Invalid package.json format: {err}"),
                    ));
                    None
                }
            },
            None => None,
        };

        let tsconfig_path = root.join("tsconfig.json");
        let compiler_options = match read_document(runtime, &tsconfig_path, diagnostics).await {
            Some(content) => match serde_json::from_str(&content) {
                Ok(value) => Some(value),
                Err(err) => {
                    diagnostics.push(Diagnostic::parse_failure(
                        &tsconfig_path,
                        format!("Invalid tsconfig.json format: {err}"),
                    ));
                    None
                }
            },
            None => None,
        };

        let environments = environment_files(runtime, root, diagnostics).await;

        Self {
            package,
            compiler_options,
            environments,
        }
    }
}

/// Read a document if it exists. Every failure past existence is reported.
async fn read_document(
    runtime: &dyn Runtime,
    path: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    if !runtime.exists(path) {
        return None;
    }

    let metadata = match runtime.metadata(path).await {
        Ok(metadata) => metadata,
        Err(err) => {
            diagnostics.push(Diagnostic::io_failure(path, err.to_string()));
            return None;
        }
    };
    if metadata.size > MAX_DOCUMENT_SIZE {
        diagnostics.push(Diagnostic::io_failure(
            path,
            format!(
                "document exceeds maximum size of {}MB",
                MAX_DOCUMENT_SIZE / 1024 / 1024
            ),
        ));
        return None;
    }

    let bytes = match runtime.read_file(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            diagnostics.push(Diagnostic::io_failure(path, err.to_string()));
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(content) => Some(content),
        Err(err) => {
            diagnostics.push(Diagnostic::parse_failure(
                path,
                format!("document contains invalid UTF-8: {err}"),
            ));
            None
        }
    }
}

async fn environment_files(
    runtime: &dyn Runtime,
    root: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let dir: PathBuf = root.join("src").join("environments");
    if !runtime.exists(&dir) {
        return Vec::new();
    }

    match runtime.read_dir(&dir).await {
        Ok(names) => {
            let mut environments: Vec<String> = names
                .into_iter()
                .filter(|name| name.starts_with("environment") && name.ends_with(".ts"))
                .collect();
            environments.sort();
            environments
        }
        Err(err) => {
            diagnostics.push(Diagnostic::io_failure(&dir, err.to_string()));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::runtime::test_utils::TestRuntime;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_all_documents() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        runtime.write(
            "package.json",
            r#"{
              "name": "shop",
              "version": "1.2.0",
              "dependencies": { "@angular/core": "^17.0.0", "rxjs": "~7.8.0" },
              "devDependencies": { "typescript": "~5.2.0" }
            }"#,
        );
        runtime.write("tsconfig.json", r#"{ "compilerOptions": { "strict": true } }"#);
        runtime.write("src/environments/environment.ts", "");
        runtime.write("src/environments/environment.prod.ts", "");
        runtime.write("src/environments/README.md", "");

        let mut diagnostics = Vec::new();
        let docs = ProjectDocuments::load(&runtime, temp.path(), &mut diagnostics).await;

        assert!(diagnostics.is_empty());
        let package = docs.package.unwrap();
        assert_eq!(package.name.as_deref(), Some("shop"));
        assert_eq!(
            package.dependencies.keys().collect::<Vec<_>>(),
            vec!["@angular/core", "rxjs"]
        );
        assert_eq!(package.dev_dependencies["typescript"], "~5.2.0");
        assert_eq!(
            docs.compiler_options.unwrap()["compilerOptions"]["strict"],
            serde_json::Value::Bool(true)
        );
        assert_eq!(
            docs.environments,
            vec!["environment.prod.ts", "environment.ts"]
        );
    }

    #[tokio::test]
    async fn test_missing_documents_are_silent() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());

        let mut diagnostics = Vec::new();
        let docs = ProjectDocuments::load(&runtime, temp.path(), &mut diagnostics).await;

        assert_eq!(docs, ProjectDocuments::default());
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_becomes_parse_failure() {
        let temp = TempDir::new().unwrap();
        let runtime = TestRuntime::new(temp.path());
        runtime.write("package.json", "{ not json");
        runtime.write("tsconfig.json", "{ \"compilerOptions\": ");

        let mut diagnostics = Vec::new();
        let docs = ProjectDocuments::load(&runtime, temp.path(), &mut diagnostics).await;

        assert!(docs.package.is_none());
        assert!(docs.compiler_options.is_none());
        assert_eq!(diagnostics.len(), 2);
        assert!(
            diagnostics
                .iter()
                .all(|d| d.kind == DiagnosticKind::ParseFailure)
        );
    }
}
