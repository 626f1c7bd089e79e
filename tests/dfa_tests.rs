use rpq::regex::ast::Ast;
use rpq::regex::dfa::determinize;
use rpq::regex::nfa::Nfa;
use rpq::regex::sim;

#[test]
fn test_determinize_literal() {
    let nfa = Nfa::build(&Ast::build("a").unwrap());
    let dfa = determinize(&nfa);
    assert_eq!(dfa.alphabet, vec!['a']);
    assert_eq!(dfa.start, 0);
    assert_eq!(dfa.states.len(), 2);
    assert_eq!(dfa.accepts, vec![1]);
    assert_eq!(dfa.trans, vec![vec![Some(1)], vec![None]]);
}

#[test]
fn test_determinize_alternation() {
    let nfa = Nfa::build(&Ast::build("a|b").unwrap());
    let dfa = determinize(&nfa);
    assert_eq!(dfa.alphabet, vec!['a', 'b']);
    assert!(sim::simulate_dfa(&dfa, "a"));
    assert!(sim::simulate_dfa(&dfa, "b"));
    assert!(!sim::simulate_dfa(&dfa, ""));
    assert!(!sim::simulate_dfa(&dfa, "ab"));
}

#[test]
fn test_determinize_kleene_star() {
    let nfa = Nfa::build(&Ast::build("a*").unwrap());
    let dfa = determinize(&nfa);
    assert!(sim::simulate_dfa(&dfa, ""));
    assert!(sim::simulate_dfa(&dfa, "aaaa"));
    assert!(!sim::simulate_dfa(&dfa, "ab"));
}

#[test]
fn test_dfa_agrees_with_nfa() {
    let words = ["", "a", "b", "ab", "abb", "aabb", "babb", "bba", "abab"];
    for pattern in ["(a|b)*abb", "a(a|b)*b", "ab|ba", "a+b?"] {
        let nfa = Nfa::build(&Ast::build(pattern).unwrap());
        let dfa = determinize(&nfa);
        for word in words {
            assert_eq!(
                sim::nfa_accepts(&nfa, word),
                sim::simulate_dfa(&dfa, word),
                "pattern {pattern:?} disagrees on {word:?}",
            );
        }
    }
}

#[test]
fn test_dfa_rejects_foreign_symbol() {
    let nfa = Nfa::build(&Ast::build("a*").unwrap());
    let dfa = determinize(&nfa);
    assert!(!sim::simulate_dfa(&dfa, "c"));
}
