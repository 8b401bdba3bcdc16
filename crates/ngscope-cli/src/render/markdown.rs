//! Markdown report.

use ngscope_graph::{AnalysisResult, DirectoryNode, TreeNode};

use super::{REPORT_TITLE, Section};

const NONE_FOUND: &str = "_None found._";

/// Render the full Markdown document.
pub fn render_markdown(analysis: &AnalysisResult) -> String {
    let mut out = format!("# {REPORT_TITLE}\n\n");
    for (index, section) in sections(analysis).iter().enumerate() {
        out.push_str(&format!("## {}. {}\n\n", index + 1, section.title));
        out.push_str(&section.body);
        if !section.body.ends_with("\n\n") {
            out.push('\n');
        }
    }
    out
}

/// All report sections, in document order.
pub fn sections(analysis: &AnalysisResult) -> Vec<Section> {
    vec![
        Section {
            title: "Project Structure",
            body: structure(&analysis.structure),
        },
        Section {
            title: "Component Tree",
            body: component_tree(analysis),
        },
        Section {
            title: "Components",
            body: components(analysis),
        },
        Section {
            title: "Services",
            body: list(analysis.services.iter().map(|name| format!("- {name}"))),
        },
        Section {
            title: "Modules",
            body: list(analysis.modules.iter().map(|name| format!("- {name}"))),
        },
        Section {
            title: "Pipes",
            body: list(
                analysis
                    .pipes
                    .values()
                    .map(|pipe| format!("- {} ({})", pipe.name, pipe.file_path.display())),
            ),
        },
        Section {
            title: "Dependencies",
            body: dependencies(analysis),
        },
        Section {
            title: "Routing",
            body: list(
                analysis
                    .routes
                    .iter()
                    .map(|(path, component)| format!("- /{path} -> {component}")),
            ),
        },
        Section {
            title: "Environment Configurations",
            body: list(analysis.environments.iter().map(|file| format!("- {file}"))),
        },
        Section {
            title: "Third-party Dependencies",
            body: third_party(analysis),
        },
        Section {
            title: "TypeScript Configuration",
            body: compiler_options(analysis),
        },
        Section {
            title: "Diagnostics",
            body: list(analysis.diagnostics.iter().map(|d| format!("- {d}"))),
        },
    ]
}

/// Bullet lines followed by a blank line, or a placeholder when empty.
fn list(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines.collect();
    if lines.is_empty() {
        format!("{NONE_FOUND}\n\n")
    } else {
        format!("{}\n\n", lines.join("\n"))
    }
}

fn structure(root: &DirectoryNode) -> String {
    let mut lines = Vec::new();
    structure_lines(&root.children, "", &mut lines);
    format!("```\n{}```\n\n", lines.concat())
}

fn structure_lines(entries: &[DirectoryNode], prefix: &str, lines: &mut Vec<String>) {
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == entries.len();
        let marker = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{marker}{}\n", entry.name));
        if entry.is_dir() {
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            structure_lines(&entry.children, &child_prefix, lines);
        }
    }
}

fn component_tree(analysis: &AnalysisResult) -> String {
    if analysis.tree.is_empty() {
        return format!("{NONE_FOUND}\n\n");
    }

    let mut lines = Vec::new();
    for root in &analysis.tree.roots {
        tree_lines(root, 0, &mut lines);
    }
    let mut body = String::new();
    if !lines.is_empty() {
        body.push_str(&lines.join("\n"));
        body.push('\n');
    }

    if !analysis.tree.detached.is_empty() {
        let mut detached = Vec::new();
        for node in &analysis.tree.detached {
            tree_lines(node, 0, &mut detached);
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str("### Cyclic components (no root)\n\n");
        body.push_str(&detached.join("\n"));
        body.push('\n');
    }

    body.push('\n');
    body
}

fn tree_lines(node: &TreeNode, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}- {}", "  ".repeat(depth), node.name));
    for child in &node.children {
        tree_lines(child, depth + 1, lines);
    }
}

fn components(analysis: &AnalysisResult) -> String {
    list(analysis.components.values().map(|component| {
        if component.selector.is_empty() {
            format!("- {} ({})", component.name, component.file_path.display())
        } else {
            format!(
                "- {} `{}` ({})",
                component.name,
                component.selector,
                component.file_path.display()
            )
        }
    }))
}

fn dependencies(analysis: &AnalysisResult) -> String {
    if analysis.dependencies.is_empty() {
        return format!("{NONE_FOUND}\n\n");
    }

    let mut body = String::new();
    for (file, specifiers) in &analysis.dependencies {
        body.push_str(&format!("### {}\n", file.display()));
        if specifiers.is_empty() {
            body.push_str("_No external imports._\n");
        }
        for specifier in specifiers {
            body.push_str(&format!("- {specifier}\n"));
        }
        body.push('\n');
    }
    body
}

fn third_party(analysis: &AnalysisResult) -> String {
    let Some(package) = &analysis.package else {
        return "_No package.json found._\n\n".to_string();
    };

    let deps = list(
        package
            .dependencies
            .iter()
            .map(|(name, version)| format!("- {name}: {version}")),
    );
    let dev_deps = list(
        package
            .dev_dependencies
            .iter()
            .map(|(name, version)| format!("- {name}: {version}")),
    );
    format!("Dependencies:\n\n{deps}Dev Dependencies:\n\n{dev_deps}")
}

fn compiler_options(analysis: &AnalysisResult) -> String {
    let Some(options) = &analysis.compiler_options else {
        return "_No tsconfig.json found._\n\n".to_string();
    };
    match serde_json::to_string_pretty(options) {
        Ok(pretty) => format!("```json\n{pretty}\n```\n\n"),
        Err(err) => format!("_tsconfig.json could not be rendered: {err}_\n\n"),
    }
}
