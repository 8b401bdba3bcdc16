//! External import specifier collection.

use indexmap::IndexSet;
use oxc_ast::ast::{Program, Statement};

/// Specifiers that refer to project files rather than packages.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// Unique non-relative import specifiers of the top-level import
/// statements, in first-seen order. Type-only and side-effect imports
/// count like any other.
pub fn collect_external_imports(program: &Program<'_>) -> Vec<String> {
    let mut specifiers = IndexSet::new();

    for stmt in &program.body {
        if let Statement::ImportDeclaration(import) = stmt {
            let specifier = import.source.value.as_str();
            if !is_relative_specifier(specifier) {
                specifiers.insert(specifier.to_string());
            }
        }
    }

    specifiers.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseOptions, parse};
    use oxc_allocator::Allocator;

    fn imports_of(source: &str) -> Vec<String> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, ParseOptions::typescript()).unwrap();
        collect_external_imports(parsed.ast())
    }

    #[test]
    fn test_relative_imports_are_excluded() {
        let imports = imports_of(
            r#"
            import { Component } from '@angular/core';
            import { Observable } from 'rxjs';
            import { DataService } from './data.service';
            import { Shared } from '../shared/shared';
            "#,
        );
        assert_eq!(imports, vec!["@angular/core", "rxjs"]);
    }

    #[test]
    fn test_duplicates_collapse_in_first_seen_order() {
        let imports = imports_of(
            r#"
            import { map } from 'rxjs/operators';
            import { Injectable } from '@angular/core';
            import { filter } from 'rxjs/operators';
            "#,
        );
        assert_eq!(imports, vec!["rxjs/operators", "@angular/core"]);
    }

    #[test]
    fn test_type_only_and_side_effect_imports_count() {
        let imports = imports_of(
            r#"
            import type { Routes } from '@angular/router';
            import 'zone.js';
            "#,
        );
        assert_eq!(imports, vec!["@angular/router", "zone.js"]);
    }

    #[test]
    fn test_file_without_imports_is_empty() {
        assert!(imports_of("export const answer = 42;").is_empty());
    }

    #[test]
    fn test_is_relative_specifier() {
        assert!(is_relative_specifier("./a"));
        assert!(is_relative_specifier("../b"));
        assert!(!is_relative_specifier("@scope/pkg"));
        assert!(!is_relative_specifier("lodash"));
    }
}
