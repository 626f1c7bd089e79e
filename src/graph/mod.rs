//! Edge-labeled directed multigraphs and their promotion to automata.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::automaton::{Automaton, Edge, EdgeLabel, StateKey};

/// An edge-labeled directed multigraph over `u64`-named vertices.
///
/// Vertex names are stable identifiers independent of insertion order;
/// parallel edges with equal or distinct labels are allowed.
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    graph: DiGraph<u64, char>,
    nodes: HashMap<u64, NodeIndex>,
}

impl Default for LabeledGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl LabeledGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
        }
    }

    /// Builds the two-cycles benchmark graph: a cycle `0 → 1 → … → n → 0`
    /// labeled `labels.0` and a cycle `0 → n+1 → … → n+m → 0` labeled
    /// `labels.1`, sharing vertex 0.
    #[must_use]
    pub fn two_cycles(n: u64, m: u64, labels: (char, char)) -> Self {
        let mut graph = Self::new();
        let (first, second) = labels;
        for node in 0..n {
            graph.add_edge(node, first, node + 1);
        }
        graph.add_edge(n, first, 0);
        graph.add_edge(0, second, n + 1);
        for node in n + 1..n + m {
            graph.add_edge(node, second, node + 1);
        }
        graph.add_edge(n + m, second, 0);
        graph
    }

    /// Adds a vertex if it is not already present.
    pub fn add_node(&mut self, id: u64) {
        let graph = &mut self.graph;
        self.nodes.entry(id).or_insert_with(|| graph.add_node(id));
    }

    /// Adds a labeled edge, creating missing endpoints.
    pub fn add_edge(&mut self, from: u64, label: char, to: u64) {
        self.add_node(from);
        self.add_node(to);
        self.graph.add_edge(self.nodes[&from], self.nodes[&to], label);
    }

    /// Whether the vertex is present.
    #[must_use]
    pub fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, parallel edges counted separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates the vertex names.
    pub fn node_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.graph.node_weights().copied()
    }

    /// Iterates the edges as `(from, label, to)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (u64, char, u64)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()],
                *edge.weight(),
                self.graph[edge.target()],
            )
        })
    }

    /// The distinct edge labels, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<char> {
        let mut labels: Vec<char> = self.graph.edge_weights().copied().collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

/// Promotes a graph to an NFA in interchange form: every vertex becomes a
/// state and every edge a symbol transition.
///
/// An empty `starts` (resp. `finals`) set marks every vertex as a start
/// (resp. final) state. Ids named in the sets but absent from the graph are
/// declared as isolated states, so queries about them resolve rather than
/// fail.
#[must_use]
pub fn graph_to_nfa(
    graph: &LabeledGraph,
    starts: &HashSet<u64>,
    finals: &HashSet<u64>,
) -> Automaton {
    let mut ids: Vec<u64> = graph.node_ids().collect();
    ids.sort_unstable();
    let mut extra: Vec<u64> = starts
        .iter()
        .chain(finals.iter())
        .copied()
        .filter(|id| !graph.contains_node(*id))
        .collect();
    extra.sort_unstable();
    extra.dedup();
    ids.extend(extra);

    let as_keys = |chosen: &HashSet<u64>| -> Vec<StateKey> {
        if chosen.is_empty() {
            graph.node_ids().map(StateKey::Node).collect()
        } else {
            chosen.iter().copied().map(StateKey::Node).collect()
        }
    };

    let edges = graph
        .edges()
        .map(|(from, label, to)| Edge {
            from: StateKey::Node(from),
            to: StateKey::Node(to),
            label: EdgeLabel::Sym(label),
        })
        .collect();

    Automaton {
        states: ids.into_iter().map(StateKey::Node).collect(),
        starts: as_keys(starts),
        finals: as_keys(finals),
        edges,
    }
}
