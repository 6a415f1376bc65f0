// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The pipeline is written against these two traits so the
// stages can be exercised with in-memory data in tests and with
// files in the real binary.

use crate::error::{PipelineError, Result};

// ─── TokenLookup ──────────────────────────────────────────────────────────────
/// Maps a token string to an integer id.
///
/// Implementations:
///   - Vocabulary → fixed table loaded from a vocabulary file
pub trait TokenLookup {
    /// Id for `token`, or `default_id()` when the token is unknown.
    fn lookup(&self, token: &str) -> i64;

    /// The id returned for tokens not in the table
    fn default_id(&self) -> i64;
}

// ─── LineSource ───────────────────────────────────────────────────────────────
/// Anything that can hand out a fresh, finite sequence of lines.
///
/// Every call to `lines()` starts again from the first line, which
/// is what makes a source restartable.
///
/// Implementations:
///   - LineReader → a text file on disk
///   - Vec<String> → in-memory lines
pub trait LineSource {
    fn lines(&self) -> Result<Box<dyn Iterator<Item = Result<String>> + '_>>;
}

impl LineSource for Vec<String> {
    fn lines(&self) -> Result<Box<dyn Iterator<Item = Result<String>> + '_>> {
        let lines = self.iter().cloned().map(Ok::<String, PipelineError>);
        Ok(Box::new(lines))
    }
}
