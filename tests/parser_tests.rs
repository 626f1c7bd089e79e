use rpq::regex::ast::Ast;

#[test]
fn test_alternation() {
    let ast = Ast::build("a|b").unwrap();
    assert_eq!(
        ast,
        Ast::Alt(Box::new(Ast::Char('a')), Box::new(Ast::Char('b'))),
    );
}

#[test]
fn test_concatenation() {
    let ast = Ast::build("ab").unwrap();
    assert_eq!(
        ast,
        Ast::Concat(Box::new(Ast::Char('a')), Box::new(Ast::Char('b'))),
    );
}

#[test]
fn test_concatenation_with_whitespace() {
    assert_eq!(Ast::build("a b").unwrap(), Ast::build("ab").unwrap());
    assert_eq!(Ast::build(" a  b ").unwrap(), Ast::build("ab").unwrap());
}

#[test]
fn test_star() {
    let ast = Ast::build("a*").unwrap();
    assert_eq!(ast, Ast::Star(Box::new(Ast::Char('a'))));
}

#[test]
fn test_plus() {
    let ast = Ast::build("b+").unwrap();
    assert_eq!(ast, Ast::Plus(Box::new(Ast::Char('b'))));
}

#[test]
fn test_opt() {
    let ast = Ast::build("c?").unwrap();
    assert_eq!(ast, Ast::Opt(Box::new(Ast::Char('c'))));
}

#[test]
fn test_grouping() {
    let ast = Ast::build("(a|b)c").unwrap();
    assert_eq!(
        ast,
        Ast::Concat(
            Box::new(Ast::Alt(Box::new(Ast::Char('a')), Box::new(Ast::Char('b')))),
            Box::new(Ast::Char('c')),
        ),
    );
}

#[test]
fn test_grouping_star() {
    let ast = Ast::build("(a|b)*").unwrap();
    assert_eq!(
        ast,
        Ast::Star(Box::new(Ast::Alt(
            Box::new(Ast::Char('a')),
            Box::new(Ast::Char('b')),
        ))),
    );
}

#[test]
fn test_escaped_operator_is_literal() {
    let ast = Ast::build(r"a\*").unwrap();
    assert_eq!(
        ast,
        Ast::Concat(Box::new(Ast::Char('a')), Box::new(Ast::Char('*'))),
    );
}

#[test]
fn test_empty_pattern_is_an_error() {
    assert!(Ast::build("").is_err());
}

#[test]
fn test_leading_postfix_is_an_error() {
    assert!(Ast::build("*a").is_err());
}

#[test]
fn test_unbalanced_parens_are_an_error() {
    assert!(Ast::build("(ab").is_err());
    assert!(Ast::build("ab)").is_err());
}
