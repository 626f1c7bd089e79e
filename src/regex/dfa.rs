use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;

use crate::regex::nfa::{Nfa, StateId};
use crate::regex::sim;

/// Deterministic finite automaton produced by subset construction.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// All DFA state identifiers, densely numbered from zero.
    pub states: Vec<StateId>,
    /// Start state identifier.
    pub start: StateId,
    /// Accepting state identifiers.
    pub accepts: Vec<StateId>,
    /// Transition table indexed by state then alphabet position. [`None`]
    /// stands for the dead state.
    pub trans: Vec<Vec<Option<StateId>>>,
    /// Alphabet the transition table columns correspond to, sorted.
    pub alphabet: Vec<char>,
}

/// Determinizes an NFA via subset construction.
#[must_use]
pub fn determinize(nfa: &Nfa) -> Dfa {
    Determinizer::new(nfa).run()
}

/// Converts a set of state IDs into a sorted vector key.
fn set_to_key(set: HashSet<StateId>) -> Vec<StateId> {
    let mut vec: Vec<StateId> = set.into_iter().collect();
    vec.sort_unstable();
    vec
}

/// Worklist subset construction keyed by sorted NFA state subsets.
struct Determinizer<'a> {
    nfa: &'a Nfa,
    alphabet: Vec<char>,
    /// Mapping from NFA state subsets to DFA state IDs, in discovery order.
    map: IndexMap<Vec<StateId>, StateId>,
    queue: VecDeque<Vec<StateId>>,
    transitions: Vec<Vec<Option<StateId>>>,
}

impl<'a> Determinizer<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        let alphabet = nfa.alphabet();
        let mut map = IndexMap::new();
        let mut queue = VecDeque::new();

        let mut seed = HashSet::new();
        seed.insert(nfa.start);
        let start_key = set_to_key(sim::epsilon_closure(&seed, nfa));
        map.insert(start_key.clone(), 0);
        queue.push_back(start_key);

        Self {
            nfa,
            alphabet,
            map,
            queue,
            transitions: Vec::new(),
        }
    }

    fn run(mut self) -> Dfa {
        while let Some(key) = self.queue.pop_front() {
            let state_id = self.map[&key];
            self.ensure_capacity(state_id as usize + 1);
            let subset: HashSet<StateId> = key.iter().copied().collect();

            for symbol_idx in 0..self.alphabet.len() {
                let symbol = self.alphabet[symbol_idx];
                let next = self.advance_subset(&subset, symbol);
                self.transitions[state_id as usize][symbol_idx] = next;
            }
        }

        let accepts = self.collect_accepting();
        let states: Vec<StateId> = (0..self.map.len() as StateId).collect();
        Dfa {
            states,
            start: 0,
            accepts,
            trans: self.transitions,
            alphabet: self.alphabet,
        }
    }

    fn ensure_capacity(&mut self, len: usize) {
        while self.transitions.len() < len {
            self.transitions.push(vec![None; self.alphabet.len()]);
        }
    }

    /// The DFA successor of an NFA subset on `symbol`, discovering it if new.
    fn advance_subset(&mut self, subset: &HashSet<StateId>, symbol: char) -> Option<StateId> {
        let moved = sim::move_on(subset, symbol, self.nfa);
        if moved.is_empty() {
            return None;
        }
        let closure = sim::epsilon_closure(&moved, self.nfa);
        Some(self.lookup_or_insert(closure))
    }

    fn lookup_or_insert(&mut self, subset: HashSet<StateId>) -> StateId {
        let key = set_to_key(subset);
        if let Some(id) = self.map.get(&key) {
            *id
        } else {
            let new_id = self.map.len() as StateId;
            self.map.insert(key.clone(), new_id);
            self.queue.push_back(key);
            new_id
        }
    }

    fn collect_accepting(&self) -> Vec<StateId> {
        self.map
            .iter()
            .filter_map(|(subset, id)| {
                let accepting = subset.iter().any(|state| self.nfa.accepts.contains(state));
                accepting.then_some(*id)
            })
            .collect()
    }
}
