use rpq::core::automaton::{Automaton, Edge, EdgeLabel, StateKey};
use rpq::errors::AutomatonError;
use rpq::{AdjacencyMatrixFa, regex_to_dfa};

fn node(n: u64) -> StateKey {
    StateKey::Node(n)
}

fn edge(from: u64, label: char, to: u64) -> Edge {
    Edge {
        from: node(from),
        to: node(to),
        label: EdgeLabel::Sym(label),
    }
}

/// A path 0 -a-> 1 -b-> 2 plus the isolated vertex 3.
fn path_automaton() -> Automaton {
    Automaton {
        states: (0..4).map(node).collect(),
        starts: vec![node(0)],
        finals: vec![node(2)],
        edges: vec![edge(0, 'a', 1), edge(1, 'b', 2)],
    }
}

#[test]
fn test_closure_relates_exactly_the_reachable_pairs() {
    let fa = AdjacencyMatrixFa::from_nfa(&path_automaton()).unwrap();
    let closure = fa.closure();
    let index = |n| fa.state_index(&node(n)).unwrap();

    for n in 0..4 {
        assert!(closure.get(index(n), index(n)), "closure must be reflexive");
    }
    assert!(closure.get(index(0), index(1)));
    assert!(closure.get(index(0), index(2)));
    assert!(closure.get(index(1), index(2)));
    assert!(!closure.get(index(2), index(0)));
    assert!(!closure.get(index(0), index(3)));
    assert!(!closure.get(index(3), index(2)));
}

#[test]
fn test_accepts_explores_nondeterministic_branches() {
    // Two a-edges out of 0; only one leads to the final state.
    let fa = AdjacencyMatrixFa::from_nfa(&Automaton {
        states: (0..3).map(node).collect(),
        starts: vec![node(0)],
        finals: vec![node(2)],
        edges: vec![edge(0, 'a', 1), edge(0, 'a', 2)],
    })
    .unwrap();
    assert!(fa.accepts(&['a']));
    assert!(!fa.accepts(&['a', 'a']));
    assert!(!fa.accepts(&[]));
}

#[test]
fn test_accepts_regex_automaton() {
    let fa = AdjacencyMatrixFa::from_nfa(&regex_to_dfa("a(a|b)*b").unwrap()).unwrap();
    assert!(fa.accepts(&['a', 'b']));
    assert!(fa.accepts(&['a', 'a', 'b']));
    assert!(fa.accepts(&['a', 'b', 'a', 'b']));
    assert!(!fa.accepts(&['b']));
    assert!(!fa.accepts(&[]));
    assert!(!fa.accepts(&['a']));
}

#[test]
fn test_accepts_rejects_unmapped_symbol() {
    let fa = AdjacencyMatrixFa::from_nfa(&path_automaton()).unwrap();
    assert!(!fa.accepts(&['c']));
    assert!(fa.accepts(&['a', 'b']));
}

#[test]
fn test_accepts_is_pure() {
    let fa = AdjacencyMatrixFa::from_nfa(&path_automaton()).unwrap();
    let word = ['a', 'b'];
    assert_eq!(fa.accepts(&word), fa.accepts(&word));
    assert_eq!(fa.is_empty(), fa.is_empty());
}

#[test]
fn test_is_empty_without_start_states() {
    let mut automaton = path_automaton();
    automaton.starts.clear();
    let fa = AdjacencyMatrixFa::from_nfa(&automaton).unwrap();
    assert!(fa.is_empty());
}

#[test]
fn test_is_empty_false_when_start_is_final() {
    // The closure is reflexive, so a shared start/final state suffices.
    let fa = AdjacencyMatrixFa::from_nfa(&Automaton {
        states: vec![node(0)],
        starts: vec![node(0)],
        finals: vec![node(0)],
        edges: Vec::new(),
    })
    .unwrap();
    assert!(!fa.is_empty());
}

#[test]
fn test_from_nfa_rejects_epsilon_transitions() {
    let automaton = Automaton {
        states: vec![node(0), node(1)],
        starts: vec![node(0)],
        finals: vec![node(1)],
        edges: vec![Edge {
            from: node(0),
            to: node(1),
            label: EdgeLabel::Eps,
        }],
    };
    assert!(matches!(
        AdjacencyMatrixFa::from_nfa(&automaton),
        Err(AutomatonError::EpsilonTransition { .. })
    ));
}

#[test]
fn test_from_nfa_rejects_undeclared_endpoints() {
    let automaton = Automaton {
        states: vec![node(0)],
        starts: vec![node(0)],
        finals: vec![node(0)],
        edges: vec![edge(0, 'a', 9)],
    };
    assert!(matches!(
        AdjacencyMatrixFa::from_nfa(&automaton),
        Err(AutomatonError::UndeclaredState(_))
    ));
}

#[test]
fn test_state_index_unknown_state() {
    let fa = AdjacencyMatrixFa::from_nfa(&path_automaton()).unwrap();
    assert!(matches!(
        fa.state_index(&node(42)),
        Err(AutomatonError::UnknownState(_))
    ));
}
