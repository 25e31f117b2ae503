//! Move legality for the Seahaven layout.
//!
//! `validate` is a pure decision function over a borrowed `Board`: it
//! inspects a candidate (source, dest, count) request and either accepts
//! it or names the first rule it breaks. It never mutates anything
//! (taking `&Board` makes that a compile-time guarantee); application
//! of accepted moves is entirely the engine's job.
//!
//! The checks run in a fixed order and the first failure wins. Callers
//! surface the rejection message to players, so the order is observable
//! behavior, not an implementation detail.

use core::fmt;

use crate::board::{self, Board};
use crate::card::Card;

/// Why a move request was refused.
///
/// Rejections are ordinary values, not faults: the game state is
/// untouched and the same request stays invalid until the board changes.
/// The `Display` impl produces the player-facing diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The request asked to move fewer than one card.
    CountTooSmall,
    /// The source slot index is not in 0..=17.
    SourceOutOfRange { slot: usize },
    /// The destination slot index is not in 0..=17.
    DestOutOfRange { slot: usize },
    /// Source and destination are the same slot.
    SourceIsDest,
    /// The source slot holds fewer cards than requested.
    NotEnoughCards { requested: usize, available: usize },
    /// The destination cell already holds its one card.
    CellOccupied,
    /// Only a single card fits into a holding cell.
    MultipleCardsToCell,
    /// Foundations are filled by auto-promotion, never by request.
    FoundationDest,
    /// A King may only be played onto an empty tower.
    KingOntoOccupied,
    /// Only a King may be played onto an empty tower.
    NonKingOntoEmpty,
    /// The moving card is not the same suit as the destination top.
    SuitMismatch,
    /// The moving card is not one rank below the destination top.
    RankNotInSequence,
    /// Multi-card moves cannot start from a holding cell.
    RunFromCell,
    /// A run of `count` cards needs `count - 1` free cells as staging.
    NotEnoughFreeCells { count: usize, free: usize },
    /// The cards to move are not a same-suit strictly-descending run.
    BrokenRun,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RejectReason::CountTooSmall => write!(f, "count is less than 1"),
            RejectReason::SourceOutOfRange { slot } => {
                write!(f, "source slot {slot} is out of range")
            }
            RejectReason::DestOutOfRange { slot } => {
                write!(f, "destination slot {slot} is out of range")
            }
            RejectReason::SourceIsDest => {
                write!(f, "source and destination are the same slot")
            }
            RejectReason::NotEnoughCards { requested, available } => write!(
                f,
                "source slot holds {available} cards but {requested} were requested"
            ),
            RejectReason::CellOccupied => write!(f, "destination cell is not empty"),
            RejectReason::MultipleCardsToCell => {
                write!(f, "a holding cell takes a single card")
            }
            RejectReason::FoundationDest => {
                write!(f, "foundations are filled by auto-promotion only")
            }
            RejectReason::KingOntoOccupied => {
                write!(f, "a King may only move to an empty tower")
            }
            RejectReason::NonKingOntoEmpty => {
                write!(f, "only a King may move to an empty tower")
            }
            RejectReason::SuitMismatch => {
                write!(f, "card does not match the destination card's suit")
            }
            RejectReason::RankNotInSequence => {
                write!(f, "card is not one rank below the destination card")
            }
            RejectReason::RunFromCell => {
                write!(f, "multi-card moves cannot start from a cell")
            }
            RejectReason::NotEnoughFreeCells { count, free } => write!(
                f,
                "moving {count} cards needs {} free cells but only {free} are open",
                count - 1
            ),
            RejectReason::BrokenRun => {
                write!(f, "cards to move are not a same-suit descending run")
            }
        }
    }
}

/// True if `cards` (bottom of the run first, top of the stack last) form
/// a single-suit, strictly descending sequence with no gaps.
///
/// Empty and single-card slices trivially qualify.
pub fn is_descending_same_suit_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        pair[1].suit() == pair[0].suit() && pair[1].rank_number() + 1 == pair[0].rank_number()
    })
}

/// Decide whether moving `count` cards from `source` to `dest` is legal
/// on the given board.
///
/// Checks run in a fixed order; the first failing rule is returned:
///
///  1. `count` must be at least 1.
///  2. `source` must be a valid slot index.
///  3. `dest` must be a valid slot index.
///  4. `source` and `dest` must differ.
///  5. `source` must hold at least `count` cards.
///  6. A cell destination must be empty and take exactly one card.
///  7. A foundation destination is always refused; promotion is
///     automatic.
///  8. On a tower: a King run needs an empty tower; anything else lands
///     on a same-suit card one rank higher.
///  9. A multi-card run must start from a tower, fit within
///     `empty_cells_count + 1` cards, and be a same-suit descending
///     sequence.
pub fn validate(
    board: &Board,
    source: usize,
    dest: usize,
    count: usize,
) -> Result<(), RejectReason> {
    if count < 1 {
        return Err(RejectReason::CountTooSmall);
    }
    if !board::is_valid_slot_index(source) {
        return Err(RejectReason::SourceOutOfRange { slot: source });
    }
    if !board::is_valid_slot_index(dest) {
        return Err(RejectReason::DestOutOfRange { slot: dest });
    }
    if source == dest {
        return Err(RejectReason::SourceIsDest);
    }

    let source_cards = board.slot(source);
    if count > source_cards.len() {
        return Err(RejectReason::NotEnoughCards {
            requested: count,
            available: source_cards.len(),
        });
    }

    // The cards that would move, bottom of the run first. `moving[0]` is
    // the card that lands on the destination's top.
    let moving = &source_cards[source_cards.len() - count..];

    if board::is_cell_slot(dest) {
        if !board.slot(dest).is_empty() {
            return Err(RejectReason::CellOccupied);
        }
        if count > 1 {
            return Err(RejectReason::MultipleCardsToCell);
        }
        return Ok(());
    }

    if board::is_foundation_slot(dest) {
        return Err(RejectReason::FoundationDest);
    }

    // Destination is a tower.
    let first_moved = moving[0];
    match board.top_card(dest) {
        None => {
            if !first_moved.is_king() {
                return Err(RejectReason::NonKingOntoEmpty);
            }
        }
        Some(dest_top) => {
            if first_moved.is_king() {
                return Err(RejectReason::KingOntoOccupied);
            }
            if first_moved.suit() != dest_top.suit() {
                return Err(RejectReason::SuitMismatch);
            }
            if first_moved.rank_number() + 1 != dest_top.rank_number() {
                return Err(RejectReason::RankNotInSequence);
            }
        }
    }

    if count > 1 {
        // A cell destination was already dealt with above, so only the
        // source side can still be a cell here.
        if board::is_cell_slot(source) {
            return Err(RejectReason::RunFromCell);
        }
        // A run of k cards is staged through k-1 free cells; this ceiling
        // is the central resource constraint of the game.
        let free = board.empty_cells_count();
        if count > free + 1 {
            return Err(RejectReason::NotEnoughFreeCells { count, free });
        }
        if !is_descending_same_suit_run(moving) {
            return Err(RejectReason::BrokenRun);
        }
    }

    Ok(())
}
