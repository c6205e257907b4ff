use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::error::{ReelError, ReelResult};
use crate::graph::node::{FilterNode, NodeRole, PadRef};

/// Ordered filter graph over a fixed number of encoder inputs.
///
/// Nodes are appended in dependency order. [`FilterGraph::push`] enforces the structural rules
/// as it goes: unique node labels, unique output links, no reference to a link that is not yet
/// defined, no link consumed twice, and input arity matching the node's first filter.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FilterGraph {
    nodes: Vec<FilterNode>,
    #[serde(skip)]
    input_count: usize,
    #[serde(skip)]
    node_labels: BTreeSet<String>,
    // link name -> consumed?
    #[serde(skip)]
    links: BTreeMap<String, bool>,
}

impl FilterGraph {
    /// Empty graph whose source pads may reference inputs `0..input_count`.
    pub fn new(input_count: usize) -> Self {
        Self {
            nodes: Vec::new(),
            input_count,
            node_labels: BTreeSet::new(),
            links: BTreeMap::new(),
        }
    }

    /// Append a node after checking it against everything defined so far.
    pub fn push(&mut self, node: FilterNode) -> ReelResult<()> {
        if self.node_labels.contains(&node.label) {
            return Err(ReelError::graph(format!(
                "duplicate node label '{}'",
                node.label
            )));
        }
        let Some(first) = node.ops.first() else {
            return Err(ReelError::graph(format!(
                "node '{}' has no filters",
                node.label
            )));
        };
        if node.inputs.len() != first.arity() {
            return Err(ReelError::graph(format!(
                "node '{}' has {} inputs, filter expects {}",
                node.label,
                node.inputs.len(),
                first.arity()
            )));
        }
        if node.outputs.is_empty() {
            return Err(ReelError::graph(format!(
                "node '{}' has no outputs",
                node.label
            )));
        }

        let mut consumed = Vec::new();
        for pad in &node.inputs {
            match pad {
                PadRef::Source { input, .. } => {
                    if *input >= self.input_count {
                        return Err(ReelError::graph(format!(
                            "node '{}' references input {input}, only {} declared",
                            node.label, self.input_count
                        )));
                    }
                }
                PadRef::Label(name) => match self.links.get(name) {
                    None => {
                        return Err(ReelError::graph(format!(
                            "node '{}' references undefined link '{name}'",
                            node.label
                        )));
                    }
                    Some(true) => {
                        return Err(ReelError::graph(format!(
                            "node '{}' consumes link '{name}' which is already consumed",
                            node.label
                        )));
                    }
                    Some(false) => {
                        if consumed.contains(name) {
                            return Err(ReelError::graph(format!(
                                "node '{}' consumes link '{name}' twice",
                                node.label
                            )));
                        }
                        consumed.push(name.clone());
                    }
                },
            }
        }

        for (i, out) in node.outputs.iter().enumerate() {
            if self.links.contains_key(out) || node.outputs[..i].contains(out) {
                return Err(ReelError::graph(format!(
                    "node '{}' redefines link '{out}'",
                    node.label
                )));
            }
        }

        for name in consumed {
            self.links.insert(name, true);
        }
        for out in &node.outputs {
            self.links.insert(out.clone(), false);
        }
        self.node_labels.insert(node.label.clone());
        self.nodes.push(node);
        Ok(())
    }

    /// Check that the graph has a single sink and that it is `sink`.
    pub fn validate(&self, sink: &str) -> ReelResult<()> {
        let open: Vec<&str> = self
            .links
            .iter()
            .filter(|(_, consumed)| !**consumed)
            .map(|(name, _)| name.as_str())
            .collect();
        match open.as_slice() {
            [only] if *only == sink => Ok(()),
            [] => Err(ReelError::graph("graph has no unconsumed output")),
            _ => Err(ReelError::graph(format!(
                "graph must end in exactly one output '{sink}', found {open:?}"
            ))),
        }
    }

    /// Nodes in dependency order.
    pub fn nodes(&self) -> &[FilterNode] {
        &self.nodes
    }

    /// Number of encoder inputs the graph may reference.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Nodes with the given role, in order.
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &FilterNode> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    /// The node writing `pad`, if any.
    pub fn producer_of(&self, pad: &str) -> Option<&FilterNode> {
        self.nodes.iter().find(|n| n.outputs.iter().any(|o| o == pad))
    }

    /// Serialize as a single `filter_complex` expression.
    pub fn to_filter_complex(&self) -> String {
        self.nodes
            .iter()
            .map(FilterNode::statement)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl PartialEq for FilterGraph {
    fn eq(&self, other: &Self) -> bool {
        self.input_count == other.input_count && self.nodes == other.nodes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/filter_graph.rs"]
mod tests;
