//! Regex frontend: compiles a pattern string down to a minimal DFA and hands
//! it over in the flattened interchange form the engine lowers.

pub mod ast;
pub mod dfa;
pub mod lexer;
pub mod min;
pub mod nfa;
pub mod parser;
pub mod sim;
pub mod tokens;

use crate::core::automaton::{Automaton, Edge, EdgeLabel, StateKey};
use crate::errors::BuildError;
use crate::regex::ast::Ast;
use crate::regex::dfa::Dfa;
use crate::regex::nfa::Nfa;

/// Compiles a pattern into a minimal DFA, flattened for the engine.
///
/// The pipeline is lex → parse → Thompson NFA → subset construction →
/// partition refinement. The result carries no epsilon edges; states are
/// [`StateKey::State`] identifiers.
///
/// # Errors
///
/// Returns a [`BuildError`] when the pattern does not lex or parse.
pub fn regex_to_dfa(pattern: &str) -> Result<Automaton, BuildError> {
    let ast = Ast::build(pattern)?;
    let nfa = Nfa::build(&ast);
    let dfa = min::minimize(&dfa::determinize(&nfa));
    Ok(flatten(&dfa))
}

/// Rewrites a dense DFA into the opaque-state interchange form.
fn flatten(dfa: &Dfa) -> Automaton {
    let states = dfa.states.iter().map(|&s| StateKey::State(s)).collect();
    let starts = vec![StateKey::State(dfa.start)];
    let finals = dfa.accepts.iter().map(|&s| StateKey::State(s)).collect();

    let mut edges = Vec::new();
    for (state, row) in dfa.trans.iter().enumerate() {
        for (symbol_idx, dest) in row.iter().enumerate() {
            if let Some(to) = dest {
                edges.push(Edge {
                    from: StateKey::State(state as u32),
                    to: StateKey::State(*to),
                    label: EdgeLabel::Sym(dfa.alphabet[symbol_idx]),
                });
            }
        }
    }

    Automaton {
        states,
        starts,
        finals,
        edges,
    }
}
