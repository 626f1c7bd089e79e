use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::automaton::{Automaton, EdgeLabel, StateKey};
use crate::core::matrix::BoolMatrix;
use crate::errors::{AutomatonError, MatrixError};

/// A finite automaton lowered to one boolean adjacency matrix per symbol.
///
/// States are keyed by opaque [`StateKey`]s and mapped bijectively onto the
/// dense range `0..states_num`. The reflexive-transitive closure over the
/// union of all symbol matrices is computed eagerly at construction and
/// cached; the value is immutable afterwards.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixFa {
    states_num: usize,
    states: IndexMap<StateKey, usize>,
    start_indices: HashSet<usize>,
    final_indices: HashSet<usize>,
    matrices: IndexMap<char, BoolMatrix>,
    closure: BoolMatrix,
}

impl AdjacencyMatrixFa {
    /// Lowers a flattened automaton into matrix form.
    ///
    /// States are indexed in declaration order. Every transition must carry a
    /// concrete symbol and connect declared states.
    ///
    /// # Errors
    ///
    /// [`AutomatonError::EpsilonTransition`] for epsilon edges and
    /// [`AutomatonError::UndeclaredState`] for endpoints or start/final
    /// markers outside the declared state set.
    pub fn from_nfa(nfa: &Automaton) -> Result<Self, AutomatonError> {
        let mut states: IndexMap<StateKey, usize> = IndexMap::with_capacity(nfa.states.len());
        for key in &nfa.states {
            let index = states.len();
            states.entry(key.clone()).or_insert(index);
        }
        let states_num = states.len();

        let lookup = |key: &StateKey| {
            states
                .get(key)
                .copied()
                .ok_or_else(|| AutomatonError::UndeclaredState(key.clone()))
        };

        let mut start_indices = HashSet::new();
        for key in &nfa.starts {
            start_indices.insert(lookup(key)?);
        }
        let mut final_indices = HashSet::new();
        for key in &nfa.finals {
            final_indices.insert(lookup(key)?);
        }

        let mut matrices: IndexMap<char, BoolMatrix> = IndexMap::new();
        for edge in &nfa.edges {
            let symbol = match edge.label {
                EdgeLabel::Sym(symbol) => symbol,
                EdgeLabel::Eps => {
                    return Err(AutomatonError::EpsilonTransition {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                    });
                }
            };
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            matrices
                .entry(symbol)
                .or_insert_with(|| BoolMatrix::zeros(states_num, states_num))
                .set(from, to)?;
        }

        Self::assemble(states, start_indices, final_indices, matrices)
    }

    /// Assembles an automaton from already-lowered parts, as the intersection
    /// does. The closure is recomputed for the new value.
    ///
    /// # Errors
    ///
    /// [`AutomatonError::IndexOutOfRange`] when an index set escapes the
    /// dense state range, [`MatrixError::DimensionMismatch`] when a symbol
    /// matrix is not `states_num × states_num`.
    pub fn from_parts(
        states: IndexMap<StateKey, usize>,
        start_indices: HashSet<usize>,
        final_indices: HashSet<usize>,
        matrices: IndexMap<char, BoolMatrix>,
    ) -> Result<Self, AutomatonError> {
        let states_num = states.len();
        for &index in states.values() {
            if index >= states_num {
                return Err(AutomatonError::IndexOutOfRange { index, states_num });
            }
        }
        debug_assert_eq!(
            states.values().copied().collect::<HashSet<_>>().len(),
            states_num,
            "state indices must be a bijection onto 0..states_num",
        );
        for &index in start_indices.iter().chain(final_indices.iter()) {
            if index >= states_num {
                return Err(AutomatonError::IndexOutOfRange { index, states_num });
            }
        }
        for matrix in matrices.values() {
            if matrix.rows() != states_num || matrix.cols() != states_num {
                return Err(AutomatonError::Matrix(MatrixError::DimensionMismatch {
                    left_rows: states_num,
                    left_cols: states_num,
                    right_rows: matrix.rows(),
                    right_cols: matrix.cols(),
                }));
            }
        }

        Self::assemble(states, start_indices, final_indices, matrices)
    }

    fn assemble(
        states: IndexMap<StateKey, usize>,
        start_indices: HashSet<usize>,
        final_indices: HashSet<usize>,
        matrices: IndexMap<char, BoolMatrix>,
    ) -> Result<Self, AutomatonError> {
        let states_num = states.len();
        let closure = eval_closure(states_num, &matrices)?;
        Ok(Self {
            states_num,
            states,
            start_indices,
            final_indices,
            matrices,
            closure,
        })
    }

    /// Count of states.
    #[must_use]
    pub fn states_num(&self) -> usize {
        self.states_num
    }

    /// The state-key → dense-index bijection, in enumeration order.
    #[must_use]
    pub fn states(&self) -> &IndexMap<StateKey, usize> {
        &self.states
    }

    /// Dense indices of the start states.
    #[must_use]
    pub fn start_indices(&self) -> &HashSet<usize> {
        &self.start_indices
    }

    /// Dense indices of the final states.
    #[must_use]
    pub fn final_indices(&self) -> &HashSet<usize> {
        &self.final_indices
    }

    /// The per-symbol adjacency matrices. Symbols absent from the map have no
    /// transitions.
    #[must_use]
    pub fn matrices(&self) -> &IndexMap<char, BoolMatrix> {
        &self.matrices
    }

    /// The cached reflexive-transitive closure over the union of all symbol
    /// matrices.
    #[must_use]
    pub fn closure(&self) -> &BoolMatrix {
        &self.closure
    }

    /// Resolves a state key to its dense index.
    ///
    /// # Errors
    ///
    /// [`AutomatonError::UnknownState`] when the key is not part of this
    /// automaton.
    pub fn state_index(&self, key: &StateKey) -> Result<usize, AutomatonError> {
        self.states
            .get(key)
            .copied()
            .ok_or_else(|| AutomatonError::UnknownState(key.clone()))
    }

    /// Simulates the automaton over `word`, exploring every nondeterministic
    /// branch. Symbols with no adjacency matrix kill the branch.
    #[must_use]
    pub fn accepts(&self, word: &[char]) -> bool {
        let mut configurations: Vec<(usize, usize)> = self
            .start_indices
            .iter()
            .map(|&state| (0, state))
            .collect();

        while let Some((pos, state)) = configurations.pop() {
            if pos == word.len() {
                if self.final_indices.contains(&state) {
                    return true;
                }
                continue;
            }
            if let Some(matrix) = self.matrices.get(&word[pos]) {
                for to_state in matrix.row_true_cols(state) {
                    configurations.push((pos + 1, to_state));
                }
            }
        }

        false
    }

    /// Whether the recognized language is empty: no final state is reachable
    /// from any start state. The closure is reflexive, so a start state that
    /// is also final makes the language non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.start_indices.iter().any(|&start| {
            self.final_indices
                .iter()
                .any(|&end| self.closure.get(start, end))
        })
    }

    /// Builds the tensor-product intersection of two automata.
    ///
    /// The result recognizes exactly the words both inputs recognize. Product
    /// states are keyed `Pair(a, b)` and indexed `idx(a)·M + idx(b)` where
    /// `M` is `other.states_num()`, matching the [`BoolMatrix::kron`] block
    /// layout. Symbols present in only one factor contribute no matrix.
    ///
    /// # Errors
    ///
    /// Propagates construction failures from [`AdjacencyMatrixFa::from_parts`].
    pub fn intersect(&self, other: &AdjacencyMatrixFa) -> Result<AdjacencyMatrixFa, AutomatonError> {
        let mut states = IndexMap::with_capacity(self.states_num * other.states_num);
        for (key, &index) in &self.states {
            for (other_key, &other_index) in &other.states {
                states.insert(
                    StateKey::pair(key.clone(), other_key.clone()),
                    index * other.states_num + other_index,
                );
            }
        }

        let mut start_indices = HashSet::new();
        for &start in &self.start_indices {
            for &other_start in &other.start_indices {
                start_indices.insert(start * other.states_num + other_start);
            }
        }
        let mut final_indices = HashSet::new();
        for &end in &self.final_indices {
            for &other_end in &other.final_indices {
                final_indices.insert(end * other.states_num + other_end);
            }
        }

        let mut matrices = IndexMap::new();
        for (&symbol, matrix) in &self.matrices {
            if let Some(other_matrix) = other.matrices.get(&symbol) {
                matrices.insert(symbol, matrix.kron(other_matrix));
            }
        }

        debug!(
            states = states.len(),
            symbols = matrices.len(),
            "intersected automata"
        );
        AdjacencyMatrixFa::from_parts(states, start_indices, final_indices, matrices)
    }
}

/// Convenience form of [`AdjacencyMatrixFa::intersect`].
pub fn intersect_automata(
    left: &AdjacencyMatrixFa,
    right: &AdjacencyMatrixFa,
) -> Result<AdjacencyMatrixFa, AutomatonError> {
    left.intersect(right)
}

/// Squares the reflexive union of the symbol matrices until it stops growing.
///
/// The union contains the identity, so each squaring at least preserves the
/// relation; any reachable pair is reachable within `states_num - 1` labeled
/// steps, so the fixpoint is the full reflexive-transitive closure.
fn eval_closure(
    states_num: usize,
    matrices: &IndexMap<char, BoolMatrix>,
) -> Result<BoolMatrix, MatrixError> {
    let mut closure = BoolMatrix::identity(states_num);
    for matrix in matrices.values() {
        closure = closure.or(matrix)?;
    }

    let mut rounds = 0usize;
    loop {
        let next = closure.matmul(&closure)?;
        if next == closure {
            debug!(states = states_num, rounds, "transitive closure settled");
            return Ok(next);
        }
        closure = next;
        rounds += 1;
    }
}
