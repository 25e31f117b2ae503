//! The 18-slot playing surface: ten towers, four holding cells, and four
//! suit foundations.
//!
//! Slots are numbered by a fixed external contract that the presentation
//! layer maps to screen positions:
//!   - 0..=9   tower columns, left to right
//!   - 10..=13 holding cells (capacity one card each)
//!   - 14..=17 foundations, one per suit in `Suit::ALL` order
//!
//! Every slot is an ordered stack of cards with index 0 at the bottom and
//! the last element on top. The board also tracks how many cells are
//! currently empty; the counter is adjusted on every relocation instead of
//! being recomputed, and the rules module uses it to cap multi-card runs.

use crate::card::{CARDS_PER_DECK, Card, Deck, NUM_RANKS, Suit};

/// Number of tower columns.
pub const NUM_TOWERS: usize = 10;
/// Number of holding cells.
pub const NUM_CELLS: usize = 4;
/// Number of foundations (one per suit).
pub const NUM_FOUNDATIONS: usize = 4;
/// Total number of slots on the board.
pub const NUM_SLOTS: usize = NUM_TOWERS + NUM_CELLS + NUM_FOUNDATIONS;
/// Cards dealt into each tower at new-game.
pub const CARDS_PER_TOWER: usize = 5;

/// Slot index of the first holding cell.
pub const FIRST_CELL_SLOT: usize = NUM_TOWERS;
/// Slot index of the first foundation.
pub const FIRST_FOUNDATION_SLOT: usize = NUM_TOWERS + NUM_CELLS;

/// True if `slot` addresses a tower column.
#[inline]
pub fn is_tower_slot(slot: usize) -> bool {
    slot < FIRST_CELL_SLOT
}

/// True if `slot` addresses a holding cell.
#[inline]
pub fn is_cell_slot(slot: usize) -> bool {
    (FIRST_CELL_SLOT..FIRST_FOUNDATION_SLOT).contains(&slot)
}

/// True if `slot` addresses a foundation.
#[inline]
pub fn is_foundation_slot(slot: usize) -> bool {
    (FIRST_FOUNDATION_SLOT..NUM_SLOTS).contains(&slot)
}

/// True if `slot` is any valid slot index (0..=17).
#[inline]
pub fn is_valid_slot_index(slot: usize) -> bool {
    slot < NUM_SLOTS
}

/// Slot index of the foundation for a given suit.
#[inline]
pub fn foundation_slot_index(suit: Suit) -> usize {
    FIRST_FOUNDATION_SLOT + suit as usize
}

/// The full playing surface for one game.
///
/// All 52 cards live in exactly one slot at any time; relocations move
/// cards between slots without ever duplicating or dropping one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [Vec<Card>; NUM_SLOTS],
    empty_cells_count: usize,
}

impl Board {
    /// A board with every slot empty and all four cells free.
    ///
    /// Mostly useful for building positions by hand; regular play starts
    /// from `deal_from_shuffled`.
    pub fn empty() -> Self {
        Board {
            slots: core::array::from_fn(|_| Vec::new()),
            empty_cells_count: NUM_CELLS,
        }
    }

    /// Deal a new game from a full deck: five cards into each tower, then
    /// one card each into cells 0 and 2, leaving cells 1 and 3 free.
    ///
    /// # Panics
    ///
    /// Panics if the deck does not hold exactly 52 cards.
    pub fn deal_from_shuffled(mut deck: Deck) -> Self {
        assert!(
            deck.len() == CARDS_PER_DECK as usize,
            "new-game deal needs a full deck, got {} cards",
            deck.len()
        );

        let mut board = Board::empty();
        for tower in 0..NUM_TOWERS {
            for card in deck.deal(CARDS_PER_TOWER) {
                board.push_card(tower, card);
            }
        }
        for cell in [0, 2] {
            for card in deck.deal(1) {
                board.push_card(FIRST_CELL_SLOT + cell, card);
            }
        }
        debug_assert!(deck.is_empty());
        board
    }

    /// The cards in a slot, bottom first.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    #[inline]
    pub fn slot(&self, slot: usize) -> &[Card] {
        assert!(is_valid_slot_index(slot), "slot index {slot} out of range");
        &self.slots[slot]
    }

    /// The cards in tower `i` (0..=9), bottom first.
    #[inline]
    pub fn tower(&self, i: usize) -> &[Card] {
        assert!(i < NUM_TOWERS, "tower index {i} out of range");
        &self.slots[i]
    }

    /// The contents of holding cell `i` (0..=3): zero or one card.
    #[inline]
    pub fn cell(&self, i: usize) -> &[Card] {
        assert!(i < NUM_CELLS, "cell index {i} out of range");
        &self.slots[FIRST_CELL_SLOT + i]
    }

    /// The cards on the foundation for `suit`, ace first.
    #[inline]
    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.slots[foundation_slot_index(suit)]
    }

    /// The top card of a slot, if any.
    #[inline]
    pub fn top_card(&self, slot: usize) -> Option<Card> {
        self.slot(slot).last().copied()
    }

    /// Number of currently-empty holding cells (0..=4).
    #[inline]
    pub fn empty_cells_count(&self) -> usize {
        self.empty_cells_count
    }

    /// Search the tops of towers and cells for the given card.
    ///
    /// Foundations are deliberately excluded: only their own top card
    /// ever matters and the promoter checks it directly. Returns the
    /// first slot index whose top card equals `card`, if any.
    pub fn find_top_card(&self, card: Card) -> Option<usize> {
        (0..FIRST_FOUNDATION_SLOT).find(|&slot| self.top_card(slot) == Some(card))
    }

    /// True once every foundation has been built through its King.
    pub fn is_won(&self) -> bool {
        Suit::ALL
            .iter()
            .all(|&suit| self.foundation(suit).len() == NUM_RANKS as usize)
    }

    /// Put a single card on top of a slot, keeping the cell counter in
    /// step. Used by dealing; play goes through `relocate`.
    pub(crate) fn push_card(&mut self, slot: usize, card: Card) {
        assert!(is_valid_slot_index(slot), "slot index {slot} out of range");
        if is_cell_slot(slot) {
            assert!(self.slots[slot].is_empty(), "cell slot {slot} already occupied");
            self.empty_cells_count -= 1;
        }
        self.slots[slot].push(card);
    }

    /// Move the top `count` cards of `source` onto `dest`, preserving
    /// their order, and adjust the empty-cell counter.
    ///
    /// This is the single mutation primitive of normal play. It performs
    /// no rule checking; callers must pass either a validated move or the
    /// exact inverse of a previously applied one.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range, `source == dest`, or the
    /// source slot holds fewer than `count` cards.
    pub(crate) fn relocate(&mut self, source: usize, dest: usize, count: usize) {
        assert!(is_valid_slot_index(source), "source slot {source} out of range");
        assert!(is_valid_slot_index(dest), "dest slot {dest} out of range");
        assert!(source != dest, "relocation from slot {source} to itself");
        let src_len = self.slots[source].len();
        assert!(
            count >= 1 && count <= src_len,
            "relocating {count} cards from slot {source} holding {src_len}"
        );

        // A cell source always empties (capacity one); a cell dest was
        // empty before the move.
        if is_cell_slot(source) {
            self.empty_cells_count += 1;
        }
        if is_cell_slot(dest) {
            self.empty_cells_count -= 1;
        }

        let moved = self.slots[source].split_off(src_len - count);
        self.slots[dest].extend(moved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, standard_deck};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(suit, Rank::from_u8(rank - 1))
    }

    /// Every one of the 52 cards appears in exactly one slot.
    fn assert_conservation(board: &Board) {
        let mut seen = [false; CARDS_PER_DECK as usize];
        let mut total = 0usize;
        for slot in 0..NUM_SLOTS {
            for &c in board.slot(slot) {
                let idx = c.index() as usize;
                assert!(!seen[idx], "card {c} appears twice");
                seen[idx] = true;
                total += 1;
            }
        }
        assert_eq!(total, CARDS_PER_DECK as usize);
    }

    fn true_empty_cells(board: &Board) -> usize {
        (0..NUM_CELLS).filter(|&i| board.cell(i).is_empty()).count()
    }

    fn shuffled_board(seed: u64) -> Board {
        let mut deck = Deck::new();
        deck.shuffle(&mut StdRng::seed_from_u64(seed));
        Board::deal_from_shuffled(deck)
    }

    #[test]
    fn slot_classification_ranges() {
        for slot in 0..NUM_SLOTS {
            assert!(is_valid_slot_index(slot));
            assert_eq!(is_tower_slot(slot), slot <= 9);
            assert_eq!(is_cell_slot(slot), (10..=13).contains(&slot));
            assert_eq!(is_foundation_slot(slot), slot >= 14);
        }
        assert!(!is_valid_slot_index(NUM_SLOTS));
        assert!(!is_valid_slot_index(usize::MAX));
    }

    #[test]
    fn foundation_slots_follow_suit_order() {
        assert_eq!(foundation_slot_index(Suit::Clubs), 14);
        assert_eq!(foundation_slot_index(Suit::Diamonds), 15);
        assert_eq!(foundation_slot_index(Suit::Hearts), 16);
        assert_eq!(foundation_slot_index(Suit::Spades), 17);
    }

    #[test]
    fn new_game_deal_shape() {
        let board = shuffled_board(1);

        for i in 0..NUM_TOWERS {
            assert_eq!(board.tower(i).len(), CARDS_PER_TOWER);
        }
        assert_eq!(board.cell(0).len(), 1);
        assert_eq!(board.cell(1).len(), 0);
        assert_eq!(board.cell(2).len(), 1);
        assert_eq!(board.cell(3).len(), 0);
        for &suit in Suit::ALL.iter() {
            assert!(board.foundation(suit).is_empty());
        }

        assert_eq!(board.empty_cells_count(), 2);
        assert_eq!(board.empty_cells_count(), true_empty_cells(&board));
        assert_conservation(&board);
    }

    #[test]
    fn deal_is_deterministic_for_a_given_deck() {
        assert_eq!(shuffled_board(42), shuffled_board(42));
        assert_ne!(shuffled_board(42), shuffled_board(43));
    }

    #[test]
    #[should_panic(expected = "full deck")]
    fn dealing_from_a_short_deck_panics() {
        let deck = Deck::from_cards(standard_deck()[..51].to_vec());
        let _ = Board::deal_from_shuffled(deck);
    }

    #[test]
    fn find_top_card_sees_only_tops_of_towers_and_cells() {
        let mut board = Board::empty();
        board.push_card(0, card(7, Suit::Hearts));
        board.push_card(0, card(6, Suit::Hearts));
        board.push_card(11, card(9, Suit::Spades));
        board.push_card(14, card(1, Suit::Clubs));

        // Top of a tower and a cell are found.
        assert_eq!(board.find_top_card(card(6, Suit::Hearts)), Some(0));
        assert_eq!(board.find_top_card(card(9, Suit::Spades)), Some(11));
        // A buried card is not.
        assert_eq!(board.find_top_card(card(7, Suit::Hearts)), None);
        // Foundation tops are never reported.
        assert_eq!(board.find_top_card(card(1, Suit::Clubs)), None);
    }

    #[test]
    fn relocate_preserves_card_order() {
        let mut board = Board::empty();
        board.push_card(0, card(9, Suit::Clubs));
        board.push_card(0, card(8, Suit::Clubs));
        board.push_card(0, card(7, Suit::Clubs));
        board.push_card(1, card(10, Suit::Clubs));

        board.relocate(0, 1, 3);
        assert!(board.tower(0).is_empty());
        assert_eq!(
            board.tower(1),
            &[
                card(10, Suit::Clubs),
                card(9, Suit::Clubs),
                card(8, Suit::Clubs),
                card(7, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn cell_counter_tracks_relocations() {
        let mut board = Board::empty();
        board.push_card(0, card(5, Suit::Diamonds));
        assert_eq!(board.empty_cells_count(), 4);

        // Tower -> cell occupies a cell.
        board.relocate(0, 10, 1);
        assert_eq!(board.empty_cells_count(), 3);
        assert_eq!(board.empty_cells_count(), true_empty_cells(&board));

        // Cell -> cell frees one and occupies another.
        board.relocate(10, 12, 1);
        assert_eq!(board.empty_cells_count(), 3);
        assert_eq!(board.empty_cells_count(), true_empty_cells(&board));

        // Cell -> tower frees the cell again.
        board.relocate(12, 3, 1);
        assert_eq!(board.empty_cells_count(), 4);
        assert_eq!(board.empty_cells_count(), true_empty_cells(&board));
    }

    #[test]
    #[should_panic(expected = "holding")]
    fn relocating_more_cards_than_present_panics() {
        let mut board = Board::empty();
        board.push_card(0, card(2, Suit::Hearts));
        board.relocate(0, 1, 2);
    }

    #[test]
    #[should_panic(expected = "itself")]
    fn relocating_a_slot_onto_itself_panics() {
        let mut board = Board::empty();
        board.push_card(4, card(2, Suit::Hearts));
        board.relocate(4, 4, 1);
    }

    #[test]
    fn is_won_requires_full_foundations() {
        let mut board = Board::empty();
        assert!(!board.is_won());

        for &suit in Suit::ALL.iter() {
            for rank in 1..=13 {
                board.push_card(foundation_slot_index(suit), card(rank, suit));
            }
        }
        assert!(board.is_won());
    }
}
