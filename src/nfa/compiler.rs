//! Thompson's construction: one compilation rule per [`Ast`] variant,
//! threaded through dangling "patch lists" so each subgraph is spliced into
//! its parent in O(1) amortized work per dangling edge.

use crate::ast::{Ast, ByteSet};
use crate::nfa::{Edge, Machine, State, StateData, StateId};

#[derive(Debug, Clone, Copy)]
enum Which {
    Out,
    Out1,
}

/// A partially-built subgraph: where matching enters it, and every
/// outgoing edge still waiting to be pointed somewhere.
struct Fragment {
    entry: StateId,
    patches: Vec<(StateId, Which)>,
}

struct Builder {
    states: Vec<State>,
}

impl Builder {
    fn new() -> Self {
        Builder { states: Vec::new() }
    }

    fn alloc(&mut self, data: StateData) -> StateId {
        let id = self.states.len();
        self.states.push(State { data, out: Edge::None, out1: Edge::None });
        id
    }

    fn patch(&mut self, patches: &[(StateId, Which)], target: Edge) {
        for &(id, which) in patches {
            match which {
                Which::Out => self.states[id].out = target,
                Which::Out1 => self.states[id].out1 = target,
            }
        }
    }

    fn compile(&mut self, ast: &Ast) -> Fragment {
        match ast {
            Ast::Char(b'.') => {
                let id = self.alloc(StateData::ConsumeAny);
                Fragment { entry: id, patches: vec![(id, Which::Out)] }
            }
            Ast::Char(b) => {
                let mut set = ByteSet::empty();
                set.insert(*b);
                let id = self.alloc(StateData::Consume(set));
                Fragment { entry: id, patches: vec![(id, Which::Out)] }
            }
            Ast::Class(set) => {
                let id = self.alloc(StateData::Consume(*set));
                Fragment { entry: id, patches: vec![(id, Which::Out)] }
            }
            Ast::Epsilon => {
                let id = self.alloc(StateData::Epsilon);
                Fragment { entry: id, patches: vec![(id, Which::Out)] }
            }
            Ast::Concat(a, b) => {
                let a = self.compile(a);
                let b = self.compile(b);
                self.patch(&a.patches, Edge::To(b.entry));
                Fragment { entry: a.entry, patches: b.patches }
            }
            Ast::Or(a, b) => {
                // Two literal bytes under `|` fuse into a single consuming
                // state over the union of both bytes, rather than an
                // epsilon split between two one-byte states.
                if let (Ast::Char(x), Ast::Char(y)) = (a.as_ref(), b.as_ref()) {
                    if *x != b'.' && *y != b'.' {
                        let mut set = ByteSet::empty();
                        set.insert(*x);
                        set.insert(*y);
                        let id = self.alloc(StateData::Consume(set));
                        return Fragment { entry: id, patches: vec![(id, Which::Out)] };
                    }
                }
                let a = self.compile(a);
                let b = self.compile(b);
                let split = self.alloc(StateData::Epsilon);
                self.states[split].out = Edge::To(a.entry);
                self.states[split].out1 = Edge::To(b.entry);
                let mut patches = a.patches;
                patches.extend(b.patches);
                Fragment { entry: split, patches }
            }
            Ast::Star(inner) => {
                let body = self.compile(inner);
                let split = self.alloc(StateData::Epsilon);
                self.states[split].out = Edge::To(body.entry);
                self.patch(&body.patches, Edge::To(split));
                Fragment { entry: split, patches: vec![(split, Which::Out1)] }
            }
        }
    }
}

/// Compiles an expression tree into a machine whose every dangling edge has
/// been patched to the `Accept` sentinel.
pub fn compile(ast: &Ast) -> Machine {
    let mut builder = Builder::new();
    let fragment = builder.compile(ast);
    builder.patch(&fragment.patches, Edge::Accept);
    Machine { states: builder.states, entry: fragment.entry }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_compiles_to_one_consuming_state() {
        let machine = compile(&Ast::Char(b'a'));
        assert_eq!(machine.len(), 1);
    }

    #[test]
    fn dot_compiles_to_consume_any() {
        let machine = compile(&Ast::Char(b'.'));
        assert!(matches!(machine.states[0].data, StateData::ConsumeAny));
    }

    #[test]
    fn or_of_two_chars_fuses_into_one_state() {
        let machine = compile(&Ast::or(Ast::Char(b'a'), Ast::Char(b'b')));
        assert_eq!(machine.len(), 1);
        let StateData::Consume(set) = &machine.states[0].data else {
            panic!("expected a fused Consume state")
        };
        assert!(set.contains(b'a'));
        assert!(set.contains(b'b'));
    }

    #[test]
    fn or_with_compound_operand_splits() {
        let machine = compile(&Ast::or(
            Ast::concat(Ast::Char(b'a'), Ast::Char(b'b')),
            Ast::Char(b'c'),
        ));
        // a, b, c consuming states plus one epsilon split state.
        assert_eq!(machine.len(), 4);
    }

    #[test]
    fn star_loops_back_to_its_own_split_state() {
        let machine = compile(&Ast::star(Ast::Char(b'a')));
        assert_eq!(machine.len(), 2);
        let split = machine.entry;
        assert!(matches!(machine.states[split].data, StateData::Epsilon));
        // The consuming state's out edge loops back to the split.
        let StateData::Consume(_) = &machine.states[1 - split].data else {
            panic!("expected the other state to consume 'a'")
        };
    }
}
