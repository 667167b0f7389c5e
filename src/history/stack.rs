/// Linear back/forward record of committed navigations.
///
/// One entry per committed location, a cursor pointing at the current one.
/// Pushing while the cursor is behind the tip truncates the forward branch
/// first, matching browser session-history semantics. The stack stores
/// full paths (path plus query) and nothing else; resolving an entry back
/// into a location is the navigator's job.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryStack {
    /// Create a stack holding a single initial entry.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// The entry the cursor points at.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Append an entry, dropping any forward branch.
    pub fn push(&mut self, full_path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(full_path.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Replace the current entry in place. Forward entries survive.
    pub fn replace(&mut self, full_path: impl Into<String>) {
        self.entries[self.cursor] = full_path.into();
    }

    /// Move the cursor by `delta` entries.
    ///
    /// Returns the entry the cursor lands on, or `None` when the move would
    /// leave the stack; an out-of-range move, any `isize` delta included,
    /// does not change the cursor. `go(0)` is a no-op that returns the
    /// current entry.
    pub fn go(&mut self, delta: isize) -> Option<&str> {
        self.cursor = self.target_index(delta)?;
        Some(&self.entries[self.cursor])
    }

    /// The entry `delta` steps from the cursor, without moving the cursor.
    #[must_use]
    pub fn peek(&self, delta: isize) -> Option<&str> {
        self.target_index(delta)
            .map(|target| self.entries[target].as_str())
    }

    fn target_index(&self, delta: isize) -> Option<usize> {
        self.cursor
            .checked_add_signed(delta)
            .filter(|&target| target < self.entries.len())
    }

    /// Number of entries on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history stack always holds at least the initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Zero-based position of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// All entries in order, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
