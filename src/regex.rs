//! The public entry point: compile a pattern once, match it many times.

use std::sync::Arc;

use crate::error::CompileError;
use crate::nfa::compiler;
use crate::nfa::executor;
use crate::nfa::Machine;
use crate::parser;
use crate::pool::Pool;

pub use crate::nfa::executor::Cache;

/// A compiled pattern.
///
/// Matching is left-anchored: `is_match` asks whether *some prefix* of the
/// haystack, starting at byte 0, is accepted, not whether the pattern
/// occurs anywhere in the haystack. Anchor the pattern yourself (e.g. with
/// a leading `.*`) if you want it to match anywhere; this crate has no
/// `.*` special case, but `.` already matches any byte, so a literal
/// `.*pattern` works as written.
///
/// ```
/// use tre::Regex;
///
/// let re = Regex::new("a+b").unwrap();
/// assert!(re.is_match(b"aaab"));
/// assert!(!re.is_match(b"xaaab"));
/// ```
///
/// `Regex` is cheap to clone (an `Arc` bump) and safe to share across
/// threads: each call to [`Regex::is_match`] borrows its own scratch space
/// from an internal pool rather than touching shared mutable state.
#[derive(Clone)]
pub struct Regex {
    machine: Arc<Machine>,
    pool: Arc<Pool>,
}

impl Regex {
    /// Parses and compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if `pattern` isn't well-formed: an
    /// unmatched `(` or `[`, a malformed character-class range, or a
    /// dangling operator with no atom to apply to.
    pub fn new(pattern: &str) -> Result<Regex, CompileError> {
        let ast = parser::parse(pattern.as_bytes())?;
        let machine = compiler::compile(&ast);
        Ok(Regex { machine: Arc::new(machine), pool: Arc::new(Pool::new()) })
    }

    /// Whether some prefix of `haystack` matches.
    ///
    /// Draws a [`Cache`] from this `Regex`'s internal pool; for a tight
    /// loop over many haystacks on one thread, [`Regex::try_is_match`]
    /// with a cache you hold onto yourself avoids the pool round trip.
    pub fn is_match(&self, haystack: &[u8]) -> bool {
        let mut cache = self.pool.get();
        executor::is_match(&self.machine, &mut cache, haystack)
    }

    /// Like [`Regex::is_match`], but against a caller-supplied [`Cache`]
    /// instead of one borrowed from the internal pool.
    pub fn try_is_match(&self, cache: &mut Cache, haystack: &[u8]) -> bool {
        executor::is_match(&self.machine, cache, haystack)
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex").field("states", &self.machine.len()).finish()
    }
}
