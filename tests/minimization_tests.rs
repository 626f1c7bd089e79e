use rpq::regex::ast::Ast;
use rpq::regex::dfa::determinize;
use rpq::regex::min::minimize;
use rpq::regex::nfa::Nfa;
use rpq::regex::sim;

#[test]
fn test_minimize_star_collapses_to_one_state() {
    let nfa = Nfa::build(&Ast::build("a*").unwrap());
    let min_dfa = minimize(&determinize(&nfa));
    assert_eq!(min_dfa.states.len(), 1);
    assert!(sim::simulate_dfa(&min_dfa, ""));
    assert!(sim::simulate_dfa(&min_dfa, "aaa"));
    assert!(!sim::simulate_dfa(&min_dfa, "b"));
}

#[test]
fn test_minimize_classic_example() {
    // (a|b)*abb has the textbook four-state minimal DFA.
    let nfa = Nfa::build(&Ast::build("(a|b)*abb").unwrap());
    let dfa = determinize(&nfa);
    let min_dfa = minimize(&dfa);
    assert_eq!(min_dfa.states.len(), 4);
    assert!(min_dfa.states.len() <= dfa.states.len());
    assert!(sim::simulate_dfa(&min_dfa, "abb"));
    assert!(sim::simulate_dfa(&min_dfa, "aabb"));
    assert!(sim::simulate_dfa(&min_dfa, "babb"));
    assert!(!sim::simulate_dfa(&min_dfa, "ab"));
    assert!(!sim::simulate_dfa(&min_dfa, "abba"));
}

#[test]
fn test_minimize_preserves_language() {
    let words = ["", "a", "b", "ab", "ba", "abb", "aab", "bab", "abab", "bb"];
    for pattern in ["a(a|b)*b", "ab|ba", "(ab)*", "a?b+"] {
        let dfa = determinize(&Nfa::build(&Ast::build(pattern).unwrap()));
        let min_dfa = minimize(&dfa);
        for word in words {
            assert_eq!(
                sim::simulate_dfa(&dfa, word),
                sim::simulate_dfa(&min_dfa, word),
                "pattern {pattern:?} changed on {word:?} after minimization",
            );
        }
    }
}
