use rpq::regex::ast::Ast;
use rpq::regex::nfa::Nfa;
use rpq::regex::sim;

#[test]
fn test_nfa_simple() {
    let ast = Ast::build("a").unwrap();
    let nfa = Nfa::build(&ast);
    assert_eq!(nfa.states_num(), 2);
    assert_eq!(nfa.alphabet(), vec!['a']);
    assert!(!nfa.accepts.is_empty());
}

#[test]
fn test_nfa_complex() {
    let ast = Ast::build("(a|b)*abb").unwrap();
    let nfa = Nfa::build(&ast);
    assert!(nfa.states_num() > 0);
    assert_eq!(nfa.alphabet(), vec!['a', 'b']);
    assert!(!nfa.accepts.is_empty());
}

#[test]
fn test_simulate_nfa_accept() {
    let nfa = Nfa::build(&Ast::build("a*").unwrap());
    assert!(sim::nfa_accepts(&nfa, "aaaa"));
    assert!(sim::nfa_accepts(&nfa, ""));
}

#[test]
fn test_simulate_nfa_reject() {
    let nfa = Nfa::build(&Ast::build("a*").unwrap());
    assert!(!sim::nfa_accepts(&nfa, "b"));
    assert!(!sim::nfa_accepts(&nfa, "ab"));
}

#[test]
fn test_simulate_nfa_plus_and_opt() {
    let plus = Nfa::build(&Ast::build("a+").unwrap());
    assert!(!sim::nfa_accepts(&plus, ""));
    assert!(sim::nfa_accepts(&plus, "a"));
    assert!(sim::nfa_accepts(&plus, "aaa"));

    let opt = Nfa::build(&Ast::build("a?").unwrap());
    assert!(sim::nfa_accepts(&opt, ""));
    assert!(sim::nfa_accepts(&opt, "a"));
    assert!(!sim::nfa_accepts(&opt, "aa"));
}
