//! Regular path queries over edge-labeled directed multigraphs.
//!
//! The crate lowers both a graph and a query regex to finite automata stored
//! as per-symbol boolean adjacency matrices, intersects them with a Kronecker
//! product, and answers reachability either through the cached transitive
//! closure ([`tensor_rpq`]) or by multi-source BFS over sparse boolean
//! frontiers ([`ms_bfs_rpq`]).

pub mod core;
pub mod errors;
pub mod graph;
pub mod regex;

pub use crate::core::automaton::{Automaton, StateKey};
pub use crate::core::fa::{AdjacencyMatrixFa, intersect_automata};
pub use crate::core::matrix::BoolMatrix;
pub use crate::core::rpq::{ms_bfs_rpq, tensor_rpq};
pub use crate::errors::RpqError;
pub use crate::graph::{LabeledGraph, graph_to_nfa};
pub use crate::regex::regex_to_dfa;
