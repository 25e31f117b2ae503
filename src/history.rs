//! Linear move history: a chronological undo log plus a redo stack.
//!
//! Every card relocation of normal play lands here as one `MoveRecord`,
//! with automatic promotions tagged so that undo/redo can treat a manual
//! move and the promotions it triggered as a single unit. The walking
//! logic itself lives in the engine; this module only owns the two
//! sequences and their bookkeeping.

/// One recorded relocation: the top `count` cards of `source` moved to
/// `dest`. Immutable once appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: usize,
    pub dest: usize,
    pub count: usize,
    /// True for auto-promotions, false for player-requested moves.
    pub is_automatic: bool,
}

/// The undo log (chronological) and redo stack (reverse-chronological of
/// undone entries). Both grow without bound; memory is limited by the
/// number of moves in one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    log: Vec<MoveRecord>,
    redo: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Record a player-requested move. Any redoable future is invalidated
    /// first: once the player deviates, the old line is gone.
    pub fn record_manual(&mut self, source: usize, dest: usize, count: usize) {
        self.redo.clear();
        self.log.push(MoveRecord {
            source,
            dest,
            count,
            is_automatic: false,
        });
    }

    /// Record an auto-promotion attached to the preceding manual move.
    pub fn record_automatic(&mut self, source: usize, dest: usize, count: usize) {
        self.log.push(MoveRecord {
            source,
            dest,
            count,
            is_automatic: true,
        });
    }

    /// Re-append an entry while redoing, leaving the redo stack alone.
    pub(crate) fn replay(&mut self, mv: MoveRecord) {
        self.log.push(mv);
    }

    /// Pop the most recent log entry, if any.
    pub(crate) fn pop_latest(&mut self) -> Option<MoveRecord> {
        self.log.pop()
    }

    /// Park an undone entry on the redo stack.
    pub(crate) fn stash_undone(&mut self, mv: MoveRecord) {
        self.redo.push(mv);
    }

    /// Pop the next redoable entry, if any.
    pub(crate) fn pop_redo(&mut self) -> Option<MoveRecord> {
        self.redo.pop()
    }

    /// Push back a redo entry that turned out to belong to the next
    /// manual move.
    pub(crate) fn unpop_redo(&mut self, mv: MoveRecord) {
        self.redo.push(mv);
    }

    /// True if at least one move can be undone.
    #[inline]
    pub fn has_undo(&self) -> bool {
        !self.log.is_empty()
    }

    /// True if at least one undone move can be redone.
    #[inline]
    pub fn has_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The undo log, oldest first.
    pub fn log(&self) -> &[MoveRecord] {
        &self.log
    }

    /// The redo stack, next-to-redo last.
    pub fn redo(&self) -> &[MoveRecord] {
        &self.redo
    }
}
