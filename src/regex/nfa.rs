use crate::core::automaton::EdgeLabel;
use crate::regex::ast::Ast;

/// Identifier type for the dense states of the regex pipeline.
pub type StateId = u32;

/// Transition stored in adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Destination state.
    pub to: StateId,
    /// Transition label.
    pub label: EdgeLabel,
}

/// A Thompson-constructed nondeterministic finite automaton.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Start state.
    pub start: StateId,
    /// Accepting states, sorted and unique.
    pub accepts: Vec<StateId>,
    /// Adjacency lists; the state count is the list count.
    pub adjacency: Vec<Vec<Transition>>,
}

impl Nfa {
    /// Builds an [`Nfa`] from an AST using Thompson's construction.
    #[must_use]
    pub fn build(ast: &Ast) -> Nfa {
        let mut builder = Builder::default();
        let fragment = builder.build(ast.clone());
        builder.finalize(fragment)
    }

    /// The outgoing transitions of `state`.
    #[must_use]
    pub fn transitions(&self, state: StateId) -> &[Transition] {
        &self.adjacency[state as usize]
    }

    /// Number of states.
    #[must_use]
    pub fn states_num(&self) -> usize {
        self.adjacency.len()
    }

    /// The alphabet used by this NFA, sorted by character.
    #[must_use]
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .adjacency
            .iter()
            .flatten()
            .filter_map(|tr| match tr.label {
                EdgeLabel::Sym(c) => Some(c),
                EdgeLabel::Eps => None,
            })
            .collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}

#[derive(Default)]
struct Builder {
    adjacency: Vec<Vec<Transition>>,
}

/// A partially built automaton piece with a start state and accepting states.
#[derive(Debug, Clone)]
struct Fragment {
    start: StateId,
    accepts: Vec<StateId>,
}

impl Builder {
    fn new_state(&mut self) -> StateId {
        let id = self.adjacency.len() as StateId;
        self.adjacency.push(Vec::new());
        id
    }

    fn add_edge(&mut self, from: StateId, to: StateId, label: EdgeLabel) {
        self.adjacency[from as usize].push(Transition { to, label });
    }

    fn build(&mut self, ast: Ast) -> Fragment {
        match ast {
            Ast::Char(c) => self.build_char(c),
            Ast::Concat(lhs, rhs) => self.build_concat(*lhs, *rhs),
            Ast::Alt(lhs, rhs) => self.build_alternation(*lhs, *rhs),
            Ast::Star(inner) => self.build_star(*inner),
            Ast::Plus(inner) => self.build_plus(*inner),
            Ast::Opt(inner) => self.build_optional(*inner),
        }
    }

    fn build_char(&mut self, ch: char) -> Fragment {
        let start = self.new_state();
        let accept = self.new_state();
        self.add_edge(start, accept, EdgeLabel::Sym(ch));
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    fn build_concat(&mut self, lhs: Ast, rhs: Ast) -> Fragment {
        let left = self.build(lhs);
        let right = self.build(rhs);
        for accept in &left.accepts {
            self.add_edge(*accept, right.start, EdgeLabel::Eps);
        }
        Fragment {
            start: left.start,
            accepts: right.accepts,
        }
    }

    fn build_alternation(&mut self, lhs: Ast, rhs: Ast) -> Fragment {
        let left = self.build(lhs);
        let right = self.build(rhs);
        let start = self.new_state();
        let accept = self.new_state();
        self.add_edge(start, left.start, EdgeLabel::Eps);
        self.add_edge(start, right.start, EdgeLabel::Eps);
        for state in left.accepts.iter().chain(right.accepts.iter()) {
            self.add_edge(*state, accept, EdgeLabel::Eps);
        }
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    fn build_star(&mut self, inner: Ast) -> Fragment {
        let frag = self.build(inner);
        let start = self.new_state();
        let accept = self.new_state();
        self.add_edge(start, frag.start, EdgeLabel::Eps);
        self.add_edge(start, accept, EdgeLabel::Eps);
        for state in frag.accepts {
            self.add_edge(state, frag.start, EdgeLabel::Eps);
            self.add_edge(state, accept, EdgeLabel::Eps);
        }
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    fn build_plus(&mut self, inner: Ast) -> Fragment {
        let frag = self.build(inner);
        let start = self.new_state();
        let accept = self.new_state();
        self.add_edge(start, frag.start, EdgeLabel::Eps);
        for state in &frag.accepts {
            self.add_edge(*state, frag.start, EdgeLabel::Eps);
            self.add_edge(*state, accept, EdgeLabel::Eps);
        }
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    fn build_optional(&mut self, inner: Ast) -> Fragment {
        let frag = self.build(inner);
        let start = self.new_state();
        let accept = self.new_state();
        self.add_edge(start, frag.start, EdgeLabel::Eps);
        self.add_edge(start, accept, EdgeLabel::Eps);
        for state in frag.accepts {
            self.add_edge(state, accept, EdgeLabel::Eps);
        }
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    fn finalize(self, fragment: Fragment) -> Nfa {
        let mut accepts = fragment.accepts;
        accepts.sort_unstable();
        accepts.dedup();
        Nfa {
            start: fragment.start,
            accepts,
            adjacency: self.adjacency,
        }
    }
}
