//! Arena-backed composite filter tree

use crate::Predicate;
use ember_core::{EmberError, Result};

/// Index of a node in a [`FilterTree`] arena. Ids are never reused;
/// removed nodes leave tombstoned slots behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(usize);

/// How a list node combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Every enabled child must accept.
    All,
    /// At least one enabled child must accept. An empty list accepts.
    Any,
}

enum NodeKind {
    Leaf(Predicate),
    List { op: Op, children: Vec<FilterId> },
}

struct Node {
    name: String,
    enabled: bool,
    parent: Option<FilterId>,
    kind: NodeKind,
}

/// A tree of filters over tabular records.
///
/// The tree always has a root list node (created with [`FilterTree::new`]).
/// Children keep their insertion order, which is what the editor's tree
/// view displays.
pub struct FilterTree {
    nodes: Vec<Option<Node>>,
    root: FilterId,
}

impl FilterTree {
    /// Create a tree containing an enabled root list combining with `op`.
    pub fn new(op: Op) -> Self {
        let root = Node {
            name: "root".to_string(),
            enabled: true,
            parent: None,
            kind: NodeKind::List {
                op,
                children: Vec::new(),
            },
        };
        Self {
            nodes: vec![Some(root)],
            root: FilterId(0),
        }
    }

    /// The root list node.
    pub fn root(&self) -> FilterId {
        self.root
    }

    /// Append a leaf filter under `parent`. Fails if `parent` is not a list.
    pub fn add_leaf(
        &mut self,
        parent: FilterId,
        name: &str,
        predicate: Predicate,
    ) -> Result<FilterId> {
        self.attach(
            parent,
            Node {
                name: name.to_string(),
                enabled: true,
                parent: Some(parent),
                kind: NodeKind::Leaf(predicate),
            },
        )
    }

    /// Append a list filter under `parent`. Fails if `parent` is not a list.
    pub fn add_list(&mut self, parent: FilterId, name: &str, op: Op) -> Result<FilterId> {
        self.attach(
            parent,
            Node {
                name: name.to_string(),
                enabled: true,
                parent: Some(parent),
                kind: NodeKind::List {
                    op,
                    children: Vec::new(),
                },
            },
        )
    }

    fn attach(&mut self, parent: FilterId, node: Node) -> Result<FilterId> {
        // Validate the parent before allocating the slot.
        self.list_children(parent)?;
        let id = FilterId(self.nodes.len());
        self.nodes.push(Some(node));
        match &mut self.node_mut(parent)?.kind {
            NodeKind::List { children, .. } => children.push(id),
            NodeKind::Leaf(_) => unreachable!("parent validated as list above"),
        }
        Ok(id)
    }

    /// Number of children of a list node.
    pub fn child_count(&self, id: FilterId) -> Result<usize> {
        Ok(self.list_children(id)?.len())
    }

    /// Row of `child` within its parent, or an error if it is not a child.
    pub fn row_of_child(&self, parent: FilterId, child: FilterId) -> Result<usize> {
        self.list_children(parent)?
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| {
                EmberError::FilterError(format!("{child:?} is not a child of {parent:?}"))
            })
    }

    /// Child of `parent` at `row`.
    pub fn child(&self, parent: FilterId, row: usize) -> Result<FilterId> {
        self.list_children(parent)?
            .get(row)
            .copied()
            .ok_or_else(|| EmberError::FilterError(format!("no child at row {row}")))
    }

    /// Remove the child of `parent` at `row`, dropping its whole subtree.
    pub fn remove_child(&mut self, parent: FilterId, row: usize) -> Result<()> {
        let child = self.child(parent, row)?;
        match &mut self.node_mut(parent)?.kind {
            NodeKind::List { children, .. } => {
                children.remove(row);
            }
            NodeKind::Leaf(_) => unreachable!("child() validated parent as list"),
        }
        self.tombstone(child);
        Ok(())
    }

    fn tombstone(&mut self, id: FilterId) {
        let node = self.nodes[id.0].take();
        if let Some(Node {
            kind: NodeKind::List { children, .. },
            ..
        }) = node
        {
            for child in children {
                self.tombstone(child);
            }
        }
    }

    /// Parent of a node (`None` for the root).
    pub fn parent(&self, id: FilterId) -> Result<Option<FilterId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn name(&self, id: FilterId) -> Result<&str> {
        Ok(self.node(id)?.name.as_str())
    }

    pub fn set_name(&mut self, id: FilterId, name: &str) -> Result<()> {
        self.node_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn enabled(&self, id: FilterId) -> Result<bool> {
        Ok(self.node(id)?.enabled)
    }

    pub fn set_enabled(&mut self, id: FilterId, enabled: bool) -> Result<()> {
        self.node_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Apply the filter rooted at `id` to one record.
    ///
    /// Disabled nodes accept everything: an inactive filter must not
    /// constrain the result set.
    pub fn accept(&self, id: FilterId, headers: &[String], row: &[toml::Value]) -> Result<bool> {
        let node = self.node(id)?;
        if !node.enabled {
            return Ok(true);
        }
        match &node.kind {
            NodeKind::Leaf(predicate) => Ok(predicate.accept(headers, row)),
            NodeKind::List { op, children } => {
                let active: Vec<&FilterId> = children
                    .iter()
                    .filter(|c| matches!(self.enabled(**c), Ok(true)))
                    .collect();
                match op {
                    Op::All => {
                        for child in &active {
                            if !self.accept(**child, headers, row)? {
                                return Ok(false);
                            }
                        }
                        Ok(true)
                    }
                    Op::Any => {
                        if active.is_empty() {
                            return Ok(true);
                        }
                        for child in &active {
                            if self.accept(**child, headers, row)? {
                                return Ok(true);
                            }
                        }
                        Ok(false)
                    }
                }
            }
        }
    }

    fn node(&self, id: FilterId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .and_then(|n| n.as_ref())
            .ok_or_else(|| EmberError::FilterError(format!("no filter node {id:?}")))
    }

    fn node_mut(&mut self, id: FilterId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .and_then(|n| n.as_mut())
            .ok_or_else(|| EmberError::FilterError(format!("no filter node {id:?}")))
    }

    fn list_children(&self, id: FilterId) -> Result<&[FilterId]> {
        match &self.node(id)?.kind {
            NodeKind::List { children, .. } => Ok(children),
            NodeKind::Leaf(_) => Err(EmberError::FilterError(format!(
                "{id:?} is a leaf, not a list"
            ))),
        }
    }
}
