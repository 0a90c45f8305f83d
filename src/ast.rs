//! The expression tree produced by [`crate::parser::Parser`] and consumed by
//! [`crate::nfa::compiler`].

use std::fmt;

use itertools::Itertools;

use crate::token::ClassKind;

/// A 256-element bitmap of accepted bytes, stored as four `u64` words
/// instead of 256 `bool`s.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteSet([u64; 4]);

impl ByteSet {
    pub const fn empty() -> Self {
        ByteSet([0; 4])
    }

    pub fn insert(&mut self, byte: u8) {
        let (word, bit) = (byte / 64, byte % 64);
        self.0[word as usize] |= 1 << bit;
    }

    pub fn insert_range(&mut self, low: u8, high: u8) {
        for b in low..=high {
            self.insert(b);
        }
    }

    pub fn union(&mut self, other: &ByteSet) {
        for i in 0..4 {
            self.0[i] |= other.0[i];
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        let (word, bit) = (byte / 64, byte % 64);
        self.0[word as usize] & (1 << bit) != 0
    }

    pub fn predefined(kind: ClassKind) -> Self {
        let mut set = ByteSet::empty();
        match kind {
            ClassKind::Digit | ClassKind::NotDigit => set.insert_range(b'0', b'9'),
            ClassKind::Word | ClassKind::NotWord => {
                set.insert_range(b'0', b'9');
                set.insert_range(b'a', b'z');
                set.insert_range(b'A', b'Z');
                set.insert(b'_');
            }
            ClassKind::Space | ClassKind::NotSpace => {
                for b in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c] {
                    set.insert(b);
                }
            }
        }
        if matches!(
            kind,
            ClassKind::NotDigit | ClassKind::NotWord | ClassKind::NotSpace
        ) {
            set.negate();
        }
        set
    }

    fn negate(&mut self) {
        for word in &mut self.0 {
            *word = !*word;
        }
    }
}

/// Prints as collapsed ranges (`0x30..=0x39`) rather than 256 individual
/// bits, which is the only way a `\w` bitmap is legible in a debugger.
impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<u8> = (0u16..256).map(|b| b as u8).filter(|&b| self.contains(b)).collect();
        let chunks = members.iter().enumerate().chunk_by(|&(i, &b)| i as i16 - b as i16);
        let mut labels = Vec::new();
        for (_, group) in &chunks {
            let bytes: Vec<u8> = group.map(|(_, &b)| b).collect();
            let (lo, hi) = (bytes[0], *bytes.last().unwrap());
            labels.push(if lo == hi {
                format!("{lo:#04x}")
            } else {
                format!("{lo:#04x}..={hi:#04x}")
            });
        }
        f.debug_tuple("ByteSet").field(&labels.join(", ")).finish()
    }
}

/// The expression tree. `?` and `+` are desugared away at parse time (see
/// `crate::parser`), so only the `Star` form of repetition is ever
/// constructed here; keeping those dead variants out of the enum is what
/// lets a `match` over it stay exhaustive and meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// A single literal byte. `b'.'` is special-cased by the compiler into
    /// a match-any-byte state rather than a literal-dot bitmap bit.
    Char(u8),
    /// The empty match, produced only by desugaring `X?` into `Epsilon | X`.
    Epsilon,
    /// A character class: `[...]` or a predefined escape like `\d`.
    Class(ByteSet),
    Concat(Box<Ast>, Box<Ast>),
    Or(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
}

impl Ast {
    pub(crate) fn concat(left: Ast, right: Ast) -> Ast {
        Ast::Concat(Box::new(left), Box::new(right))
    }

    pub(crate) fn or(left: Ast, right: Ast) -> Ast {
        Ast::Or(Box::new(left), Box::new(right))
    }

    pub(crate) fn star(inner: Ast) -> Ast {
        Ast::Star(Box::new(inner))
    }
}
