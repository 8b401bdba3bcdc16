//! Component containment resolution.
//!
//! Containment is derived by plain substring matching: a component is
//! nested in another when its selector occurs anywhere in the other's
//! template text. The matcher does not parse HTML, so a selector that
//! shows up in a comment or an attribute still counts, and attribute-style
//! selectors (`[appFoo]`) only match when the bracketed text itself is
//! present.
//!
//! The graph is computed once, after the registry is complete, and is
//! immutable afterwards. Tree walks carry a visited set, so cyclic
//! containment still terminates.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::registry::ComponentRecord;

/// One node of the rendered containment tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Names in depth-first pre-order.
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.name.as_str());
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

/// Containment forest.
///
/// `detached` holds components no root reaches, which only happens when
/// containment forms a cycle with no entry from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTree {
    pub roots: Vec<TreeNode>,
    pub detached: Vec<TreeNode>,
}

impl ComponentTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.detached.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContainmentGraph {
    /// Child names per component, in registry order.
    children: IndexMap<String, Vec<String>>,
    roots: Vec<String>,
}

impl ContainmentGraph {
    /// Derive containment for every ordered pair of distinct components.
    pub fn resolve(components: &IndexMap<String, ComponentRecord>) -> Self {
        let mut children: IndexMap<String, Vec<String>> = components
            .keys()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        for (child_name, child) in components {
            if child.selector.is_empty() {
                continue;
            }
            for (parent_name, parent) in components {
                if parent_name != child_name && parent.template.contains(child.selector.as_str())
                {
                    if let Some(list) = children.get_mut(parent_name) {
                        list.push(child_name.clone());
                    }
                }
            }
        }

        let contained: IndexSet<&str> = children
            .values()
            .flat_map(|list| list.iter().map(String::as_str))
            .collect();
        let roots = components
            .keys()
            .filter(|name| !contained.contains(name.as_str()))
            .cloned()
            .collect();

        let graph = Self { children, roots };
        tracing::debug!(
            components = graph.children.len(),
            roots = graph.roots.len(),
            "resolved component containment"
        );
        graph
    }

    pub fn children_of(&self, name: &str) -> &[String] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn is_root(&self, name: &str) -> bool {
        self.roots.iter().any(|root| root == name)
    }

    /// Components whose templates contain `name`'s selector.
    pub fn parents_of(&self, name: &str) -> Vec<&str> {
        self.children
            .iter()
            .filter(|(_, list)| list.iter().any(|child| child == name))
            .map(|(parent, _)| parent.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first pre-order forest. Each root walk has its own visited
    /// set; a component already on the current walk is not entered again.
    pub fn tree(&self) -> ComponentTree {
        let mut covered: IndexSet<&str> = IndexSet::new();
        let mut tree = ComponentTree::default();

        for root in &self.roots {
            let mut visited = IndexSet::new();
            let node = self.walk(root, &mut visited);
            covered.extend(visited);
            tree.roots.push(node);
        }

        for name in self.children.keys() {
            if covered.contains(name.as_str()) {
                continue;
            }
            let mut visited = IndexSet::new();
            let node = self.walk(name, &mut visited);
            covered.extend(visited);
            tree.detached.push(node);
        }

        tree
    }

    fn walk<'g>(&'g self, name: &'g str, visited: &mut IndexSet<&'g str>) -> TreeNode {
        visited.insert(name);
        let mut node = TreeNode {
            name: name.to_string(),
            children: Vec::new(),
        };
        for child in self.children_of(name) {
            if visited.contains(child.as_str()) {
                continue;
            }
            node.children.push(self.walk(child, visited));
        }
        node
    }

    /// Copy the resolved child lists into the records.
    pub fn attach_children(&self, components: &mut IndexMap<String, ComponentRecord>) {
        for (name, record) in components.iter_mut() {
            record.children = self.children_of(name).to_vec();
        }
    }
}
