//! Routing table detection.
//!
//! A routing table is any top-level variable initialized with an array of
//! object literals. Each element that declares both `path` and `component`
//! contributes one entry; anything else in the array is ignored.

use oxc_ast::ast::{
    ArrayExpressionElement, Declaration, Expression, ObjectExpression, ObjectPropertyKind,
    Program, Statement, VariableDeclaration,
};
use oxc_span::GetSpan;

use super::metadata::strip_quotes;
use crate::registry::RouteEntry;

pub fn collect_routes(program: &Program<'_>, source_text: &str) -> Vec<RouteEntry> {
    let mut routes = Vec::new();

    for stmt in &program.body {
        let declaration = match stmt {
            Statement::VariableDeclaration(decl) => Some(&**decl),
            Statement::ExportNamedDeclaration(named) => match &named.declaration {
                Some(Declaration::VariableDeclaration(decl)) => Some(&**decl),
                _ => None,
            },
            _ => None,
        };

        if let Some(declaration) = declaration {
            collect_from_declaration(declaration, source_text, &mut routes);
        }
    }

    routes
}

fn collect_from_declaration(
    declaration: &VariableDeclaration<'_>,
    source_text: &str,
    routes: &mut Vec<RouteEntry>,
) {
    for declarator in &declaration.declarations {
        let Some(init) = &declarator.init else {
            continue;
        };
        // `[...] as Routes` and `[...] satisfies Routes` unwrap to the array.
        let Expression::ArrayExpression(array) = init.get_inner_expression() else {
            continue;
        };

        for element in &array.elements {
            if let ArrayExpressionElement::ObjectExpression(object) = element {
                if let Some(entry) = route_entry(object, source_text) {
                    routes.push(entry);
                }
            }
        }
    }
}

fn route_entry(object: &ObjectExpression<'_>, source_text: &str) -> Option<RouteEntry> {
    let mut path = None;
    let mut component = None;

    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            continue;
        };
        let Some(key) = property.key.static_name() else {
            continue;
        };
        let raw = property.value.span().source_text(source_text);
        match &*key {
            "path" => path = Some(strip_quotes(raw)),
            "component" => component = Some(raw.to_string()),
            _ => {}
        }
    }

    Some(RouteEntry {
        path: path?,
        component: component?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseOptions, parse};
    use oxc_allocator::Allocator;

    fn routes_of(source: &str) -> Vec<(String, String)> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, ParseOptions::typescript()).unwrap();
        collect_routes(parsed.ast(), source)
            .into_iter()
            .map(|r| (r.path, r.component))
            .collect()
    }

    #[test]
    fn test_entries_without_both_fields_are_skipped() {
        let routes = routes_of(
            r#"
            const routes = [
              { path: 'home', component: HomeComponent },
              { path: 'missing-component-field' },
              { component: OrphanComponent },
            ];
            "#,
        );
        assert_eq!(routes, vec![("home".into(), "HomeComponent".into())]);
    }

    #[test]
    fn test_exported_and_typed_tables() {
        let routes = routes_of(
            r#"
            import { Routes } from '@angular/router';
            export const appRoutes: Routes = [
              { path: "about", component: AboutComponent },
            ];
            export const lazy = [{ path: 'admin', component: Admin.Shell }] as Routes;
            "#,
        );
        assert_eq!(
            routes,
            vec![
                ("about".into(), "AboutComponent".into()),
                ("admin".into(), "Admin.Shell".into()),
            ]
        );
    }

    #[test]
    fn test_empty_path_is_a_route() {
        let routes = routes_of("const r = [{ path: '', component: LandingComponent }];");
        assert_eq!(routes, vec![("".into(), "LandingComponent".into())]);
    }

    #[test]
    fn test_nested_children_are_not_descended() {
        let routes = routes_of(
            r#"
            const routes = [
              {
                path: 'settings',
                component: SettingsComponent,
                children: [{ path: 'profile', component: ProfileComponent }],
              },
            ];
            "#,
        );
        assert_eq!(routes, vec![("settings".into(), "SettingsComponent".into())]);
    }

    #[test]
    fn test_every_declarator_is_scanned() {
        let routes = routes_of(
            "let a = [{ path: 'a', component: A }], n = 1, b = [{ path: 'b', component: B }];",
        );
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_non_array_initializers_are_ignored() {
        assert!(routes_of("const x = { path: 'x', component: X };").is_empty());
        assert!(routes_of("function f() { const r = [{ path: 'x', component: X }]; }").is_empty());
    }
}
