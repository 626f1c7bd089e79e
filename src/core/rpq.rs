use std::collections::HashSet;

use tracing::debug;

use crate::core::automaton::{Automaton, StateKey};
use crate::core::fa::{AdjacencyMatrixFa, intersect_automata};
use crate::core::matrix::BoolMatrix;
use crate::errors::RpqError;
use crate::graph::{LabeledGraph, graph_to_nfa};
use crate::regex::regex_to_dfa;

/// Everything both solvers need: the intersection automaton plus the regex
/// automaton's start/final keys and the resolved node lists.
struct QueryPlan {
    intersection: AdjacencyMatrixFa,
    regex_fa: Automaton,
    starts: Vec<u64>,
    finals: Vec<u64>,
}

/// Compiles the regex, promotes the graph, lowers both and intersects them.
fn plan_query(
    regex: &str,
    graph: &LabeledGraph,
    start_nodes: &HashSet<u64>,
    final_nodes: &HashSet<u64>,
) -> Result<QueryPlan, RpqError> {
    let starts = resolve_nodes(graph, start_nodes);
    let finals = resolve_nodes(graph, final_nodes);

    let regex_fa = regex_to_dfa(regex)?;
    let graph_amfa = AdjacencyMatrixFa::from_nfa(&graph_to_nfa(graph, start_nodes, final_nodes))?;
    let regex_amfa = AdjacencyMatrixFa::from_nfa(&regex_fa)?;
    let intersection = intersect_automata(&graph_amfa, &regex_amfa)?;

    Ok(QueryPlan {
        intersection,
        regex_fa,
        starts,
        finals,
    })
}

/// An empty node set stands for "every node" (the same defaulting
/// [`graph_to_nfa`] applies). The list is sorted so iteration order, and with
/// it the BFS row layout, is deterministic.
fn resolve_nodes(graph: &LabeledGraph, nodes: &HashSet<u64>) -> Vec<u64> {
    let mut resolved: Vec<u64> = if nodes.is_empty() {
        graph.node_ids().collect()
    } else {
        nodes.iter().copied().collect()
    };
    resolved.sort_unstable();
    resolved
}

/// Answers a regular path query by probing the intersection's cached
/// transitive closure.
///
/// Returns every pair `(u, v)` from `start_nodes × final_nodes` such that
/// some path from `u` to `v` spells a word of the regex's language. Empty
/// node sets stand for all graph nodes.
///
/// # Errors
///
/// [`RpqError::Regex`] when the pattern does not compile; automaton and
/// matrix failures propagate unchanged.
pub fn tensor_rpq(
    regex: &str,
    graph: &LabeledGraph,
    start_nodes: &HashSet<u64>,
    final_nodes: &HashSet<u64>,
) -> Result<HashSet<(u64, u64)>, RpqError> {
    let plan = plan_query(regex, graph, start_nodes, final_nodes)?;
    let closure = plan.intersection.closure();

    let mut result = HashSet::new();
    for &u in &plan.starts {
        for &v in &plan.finals {
            'regex_pairs: for regex_start in &plan.regex_fa.starts {
                for regex_final in &plan.regex_fa.finals {
                    let source = plan.intersection.state_index(&StateKey::pair(
                        StateKey::Node(u),
                        regex_start.clone(),
                    ))?;
                    let target = plan.intersection.state_index(&StateKey::pair(
                        StateKey::Node(v),
                        regex_final.clone(),
                    ))?;
                    if closure.get(source, target) {
                        result.insert((u, v));
                        break 'regex_pairs;
                    }
                }
            }
        }
    }

    debug!(pairs = result.len(), "tensor solver finished");
    Ok(result)
}

/// Answers a regular path query by multi-source BFS over the intersection.
///
/// One frontier row per start node; every row advances in lock-step through
/// batched boolean matrix products. Equivalent to [`tensor_rpq`] on every
/// input.
///
/// # Errors
///
/// Same contract as [`tensor_rpq`].
pub fn ms_bfs_rpq(
    regex: &str,
    graph: &LabeledGraph,
    start_nodes: &HashSet<u64>,
    final_nodes: &HashSet<u64>,
) -> Result<HashSet<(u64, u64)>, RpqError> {
    let plan = plan_query(regex, graph, start_nodes, final_nodes)?;
    let states_num = plan.intersection.states_num();
    let rows = plan.starts.len();

    let mut front = BoolMatrix::zeros(rows, states_num);
    for (row, &u) in plan.starts.iter().enumerate() {
        for regex_start in &plan.regex_fa.starts {
            let index = plan
                .intersection
                .state_index(&StateKey::pair(StateKey::Node(u), regex_start.clone()))?;
            front.set(row, index)?;
        }
    }

    let mut visited = BoolMatrix::zeros(rows, states_num);
    let mut rounds = 0usize;
    while front.nnz() > 0 {
        let mut new_front = BoolMatrix::zeros(rows, states_num);
        for matrix in plan.intersection.matrices().values() {
            new_front = new_front.or(&front.matmul(matrix)?)?;
        }
        // Compute, then absorb, then subtract: the frontier keeps only cells
        // never seen before, which bounds the loop by the state count.
        visited = visited.or(&front)?;
        front = new_front.diff_positive(&visited)?;
        rounds += 1;
    }
    debug!(rounds, visited = visited.nnz(), "frontier drained");

    let mut result = HashSet::new();
    for (row, &u) in plan.starts.iter().enumerate() {
        for &v in &plan.finals {
            for regex_final in &plan.regex_fa.finals {
                let index = plan
                    .intersection
                    .state_index(&StateKey::pair(StateKey::Node(v), regex_final.clone()))?;
                if visited.get(row, index) {
                    result.insert((u, v));
                    break;
                }
            }
        }
    }

    Ok(result)
}
