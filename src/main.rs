use std::collections::HashSet;
use std::env;

use rpq::{AdjacencyMatrixFa, LabeledGraph, ms_bfs_rpq, regex_to_dfa, tensor_rpq};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let pattern = match args.next() {
        Some(s) => s,
        None => {
            eprintln!("Usage: rpq <pattern> [word]");
            return;
        }
    };
    let word = args.next();

    // Demo graph: an a-cycle over {0, 1, 2} and a b-cycle over {0, 3, 4, 5}
    // sharing vertex 0.
    let graph = LabeledGraph::two_cycles(2, 3, ('a', 'b'));
    println!(
        "Graph: nodes={} edges={} labels={:?}",
        graph.node_count(),
        graph.edge_count(),
        graph.labels()
    );

    let regex_fa = match regex_to_dfa(&pattern) {
        Ok(fa) => fa,
        Err(e) => {
            eprintln!("Build error: {e}");
            return;
        }
    };
    println!(
        "Regex DFA: states={} finals={}",
        regex_fa.states.len(),
        regex_fa.finals.len()
    );

    if let Some(word) = word {
        match AdjacencyMatrixFa::from_nfa(&regex_fa) {
            Ok(amfa) => {
                let symbols: Vec<char> = word.chars().collect();
                println!("Accepts {word:?}: {}", amfa.accepts(&symbols));
            }
            Err(e) => eprintln!("Lowering error: {e}"),
        }
    }

    let starts = HashSet::from([0]);
    let finals = HashSet::new();
    match (
        tensor_rpq(&pattern, &graph, &starts, &finals),
        ms_bfs_rpq(&pattern, &graph, &starts, &finals),
    ) {
        (Ok(tensor), Ok(bfs)) => {
            let mut pairs: Vec<(u64, u64)> = tensor.iter().copied().collect();
            pairs.sort_unstable();
            println!("Reachable from 0: {pairs:?}");
            if tensor != bfs {
                eprintln!("solver mismatch: tensor={tensor:?} bfs={bfs:?}");
            }
        }
        (Err(e), _) | (_, Err(e)) => eprintln!("Query error: {e}"),
    }
}
