use std::fmt;

/// Opaque identifier for an automaton state.
///
/// The engine never inspects the structure of a key beyond equality and
/// hashing; it only maintains the bijection between keys and dense indices.
/// Graph vertices, regex-pipeline states and product states all flow through
/// the same type so intersections can nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// A graph vertex promoted to an automaton state.
    Node(u64),
    /// A state minted by the regex pipeline.
    State(u32),
    /// A product state combining one state from each factor automaton.
    Pair(Box<StateKey>, Box<StateKey>),
}

impl StateKey {
    /// Creates a product-state key.
    #[must_use]
    pub fn pair(left: StateKey, right: StateKey) -> StateKey {
        StateKey::Pair(Box::new(left), Box::new(right))
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Node(n) => write!(f, "{n}"),
            StateKey::State(s) => write!(f, "q{s}"),
            StateKey::Pair(left, right) => write!(f, "({left}, {right})"),
        }
    }
}

/// Labels describing the kind of transition between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// Epsilon transition that consumes no input.
    Eps,
    /// Consumes a specific symbol.
    Sym(char),
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeLabel::Eps => write!(f, "ε"),
            EdgeLabel::Sym(c) => write!(f, "{c}"),
        }
    }
}

/// A labeled transition between two opaque states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Origin state.
    pub from: StateKey,
    /// Destination state.
    pub to: StateKey,
    /// Transition label.
    pub label: EdgeLabel,
}

/// A finite automaton in flattened form, as handed over by the regex and
/// graph frontends.
///
/// `states` declares every state; `starts` and `finals` are subsets of it.
/// The edge list may mention a state any number of times, but endpoints not
/// present in `states` are rejected when the automaton is lowered to matrix
/// form, as are epsilon edges.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    /// All declared states, in enumeration order.
    pub states: Vec<StateKey>,
    /// Start states.
    pub starts: Vec<StateKey>,
    /// Final (accepting) states.
    pub finals: Vec<StateKey>,
    /// Flattened edge list.
    pub edges: Vec<Edge>,
}
