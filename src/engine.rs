//! Game-level engine: move execution, automatic promotion, and undo/redo.
//!
//! `Game` owns the board and the move history and is the only writer of
//! either. A move request flows through exactly one path:
//!
//!   1. `rules::validate` decides legality without touching anything.
//!   2. The relocation is applied and recorded as a manual move (which
//!      also invalidates any redoable future).
//!   3. The auto-promoter runs to quiescence, applying and recording
//!      each promotion as an automatic move.
//!
//! Undo and redo replay history entries through the same relocation
//! primitive, walking over automatic entries so that one player-visible
//! move and the promotions it triggered always travel as a unit.
//!
//! The presentation layer is an injected `RelocationObserver`; the engine
//! calls it once per physical relocation and never waits on it. With no
//! observer attached, notifications are skipped entirely.

use log::debug;
use rand::Rng;

use crate::board::{self, Board};
use crate::card::{Card, Deck, NUM_RANKS, Rank, Suit};
use crate::history::History;
use crate::rules::{self, RejectReason};

/// Callback interface for the presentation layer.
///
/// Invoked synchronously, once per relocation (manual move, promotion,
/// undo step, redo step), never batched. `cards` are the moved cards in
/// their original stack order; `dest_offset` is how many cards already
/// sat at the destination before this move (always 0 for foundations,
/// which only ever show their top card).
pub trait RelocationObserver {
    fn cards_relocated(&mut self, cards: &[Card], dest_slot: usize, dest_offset: usize);
}

/// One Seahaven Towers session: board, history, and optional observer.
pub struct Game {
    board: Board,
    history: History,
    observer: Option<Box<dyn RelocationObserver>>,
}

impl Game {
    /// Deal a new game from a fresh thread-local shuffle.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Deal a new game using the caller's RNG, for reproducible deals.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::from_deck(deck)
    }

    /// Deal a new game from an exact 52-card permutation.
    ///
    /// Like every deal, this ends with a silent promotion pass: aces (and
    /// any cards they free up) that surface face-up move straight to
    /// their foundations before the game becomes interactive, without
    /// being recorded or notified.
    pub fn from_deck(deck: Deck) -> Self {
        let mut game = Game {
            board: Board::deal_from_shuffled(deck),
            history: History::new(),
            observer: None,
        };
        game.run_auto_promotions(false, false);
        game
    }

    /// Abandon the current game and deal a fresh thread-local shuffle.
    pub fn new_game(&mut self) {
        self.new_game_with_rng(&mut rand::thread_rng());
    }

    /// Abandon the current game and re-deal from the caller's RNG.
    pub fn new_game_with_rng<R: Rng>(&mut self, rng: &mut R) {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        self.reset_from_deck(deck);
    }

    /// Abandon the current game and re-deal an exact permutation. The
    /// history is cleared; the attached observer, if any, is kept.
    pub fn reset_from_deck(&mut self, deck: Deck) {
        self.board = Board::deal_from_shuffled(deck);
        self.history = History::new();
        self.run_auto_promotions(false, false);
        debug!("dealt a new game");
    }

    /// Attach the presentation-layer observer.
    pub fn set_observer(&mut self, observer: Box<dyn RelocationObserver>) {
        self.observer = Some(observer);
    }

    /// Detach the observer; notifications become no-ops again.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True once all four foundations are complete.
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// True if there is a manual move to undo.
    pub fn has_undo(&self) -> bool {
        self.history.has_undo()
    }

    /// True if there is an undone manual move to redo.
    pub fn has_redo(&self) -> bool {
        self.history.has_redo()
    }

    /// Request a move of `count` cards from `source` to `dest`.
    ///
    /// On success the move is applied, recorded, and followed by an
    /// auto-promotion pass. On rejection nothing changes and the reason
    /// says which rule failed first; it is meant for diagnostic display,
    /// not for branching.
    pub fn try_move(
        &mut self,
        source: usize,
        dest: usize,
        count: usize,
    ) -> Result<(), RejectReason> {
        rules::validate(&self.board, source, dest, count)?;
        self.apply_relocation(source, dest, count, true);
        self.history.record_manual(source, dest, count);
        self.run_auto_promotions(true, true);
        Ok(())
    }

    /// `try_move` with the rejection reason logged and discarded.
    pub fn move_request(&mut self, source: usize, dest: usize, count: usize) -> bool {
        match self.try_move(source, dest, count) {
            Ok(()) => true,
            Err(reason) => {
                debug!("move {source}->{dest} x{count} rejected: {reason}");
                false
            }
        }
    }

    /// Take back the most recent manual move together with every
    /// automatic promotion it triggered. No-op if nothing was played.
    pub fn undo(&mut self) {
        while let Some(mv) = self.history.pop_latest() {
            self.history.stash_undone(mv);
            // Walk the relocation backwards; notify again, re-log never.
            self.apply_relocation(mv.dest, mv.source, mv.count, true);
            if !mv.is_automatic {
                break;
            }
        }
    }

    /// Replay the most recently undone manual move together with its
    /// trailing promotions. No-op if there is nothing to redo.
    pub fn redo(&mut self) {
        let mut replayed = false;
        while let Some(mv) = self.history.pop_redo() {
            if replayed && !mv.is_automatic {
                // The next manual unit stays parked for the next call.
                self.history.unpop_redo(mv);
                break;
            }
            self.apply_relocation(mv.source, mv.dest, mv.count, true);
            self.history.replay(mv);
            replayed = true;
        }
    }

    /// Relocate the top `count` cards of `source` onto `dest` and tell
    /// the observer. No validation happens here: callers pass either a
    /// validated request, a promotion, or the inverse of a recorded move.
    fn apply_relocation(&mut self, source: usize, dest: usize, count: usize, notify: bool) {
        if notify && self.observer.is_some() {
            let source_cards = self.board.slot(source);
            let moving: Vec<Card> = source_cards[source_cards.len() - count..].to_vec();
            let dest_offset = if board::is_foundation_slot(dest) {
                0
            } else {
                self.board.slot(dest).len()
            };
            if let Some(observer) = self.observer.as_mut() {
                observer.cards_relocated(&moving, dest, dest_offset);
            }
        }
        self.board.relocate(source, dest, count);
    }

    /// Promote every eligible top card to its foundation.
    ///
    /// Scans suits in `Suit::ALL` order, moving the next required card of
    /// each suit from wherever it tops a tower or cell, and keeps passing
    /// over the suits until a full pass promotes nothing. Each promotion
    /// goes through the normal relocation path; `notify` and `record`
    /// are switched off during the initial deal.
    fn run_auto_promotions(&mut self, notify: bool, record: bool) {
        let mut promoted = true;
        while promoted {
            promoted = false;
            for &suit in Suit::ALL.iter() {
                let foundation = board::foundation_slot_index(suit);
                let next_rank = self
                    .board
                    .top_card(foundation)
                    .map_or(1, |top| top.rank_number() + 1);
                if next_rank > NUM_RANKS {
                    // Foundation already complete.
                    continue;
                }
                let wanted = Card::new(suit, Rank::from_u8(next_rank - 1));
                if let Some(source) = self.board.find_top_card(wanted) {
                    debug!("auto-promoting {wanted} from slot {source}");
                    self.apply_relocation(source, foundation, 1, notify);
                    if record {
                        self.history.record_automatic(source, foundation, 1);
                    }
                    promoted = true;
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
