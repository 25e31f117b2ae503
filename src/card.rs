//! Card, Suit, and Rank types for a standard 52-card deck, plus the `Deck`
//! used to deal a new game.
//!
//! - `Card` is a compact 1-byte representation (0..=51).
//! - `Suit` and `Rank` give human-readable structure on top of that.
//! - `Deck` owns an ordered pile of cards, shuffles uniformly, and deals
//!   fixed-size batches off its tail.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// A playing card represented compactly as an index in 0..=51.
///
/// The mapping is:
/// ```text
/// index = suit as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card(pub u8);

/// The four suits, in the same fixed order the foundation slots use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

/// The thirteen ranks in a standard deck.
///
/// Note: Ace is treated as the lowest rank here (0), and you can use
/// `rank_number()` on `Card` to get 1..=13 as a convenience.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

impl Card {
    /// Create a new card from a suit and rank.
    ///
    /// This uses the mapping:
    /// ```text
    /// index = suit as u8 * 13 + rank as u8
    /// ```
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        let s = suit as u8;
        let r = rank as u8;
        debug_assert!(s < NUM_SUITS && r < NUM_RANKS);
        Card(s * NUM_RANKS + r)
    }

    /// Create a card from a raw index in 0..=51.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index >= 52`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < CARDS_PER_DECK);
        Card(index)
    }

    /// Return the raw 0..=51 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Return the suit of this card.
    #[inline]
    pub fn suit(self) -> Suit {
        Suit::from_u8(self.0 / NUM_RANKS)
    }

    /// Return the rank of this card.
    #[inline]
    pub fn rank(self) -> Rank {
        Rank::from_u8(self.0 % NUM_RANKS)
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank() as u8 + 1
    }

    /// True for a King, the only card allowed onto an empty tower.
    #[inline]
    pub fn is_king(self) -> bool {
        self.rank() == Rank::King
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        let r = match self.rank() {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };
        let s = self.suit().short_char();
        format!("{r}{s}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    ///
    /// This order matches the foundation slot layout (clubs, diamonds,
    /// hearts, spades) and the order the auto-promoter scans suits in.
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Clubs,
        Suit::Diamonds,
        Suit::Hearts,
        Suit::Spades,
    ];

    /// Construct a suit from a small integer 0..=3.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 4`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => panic!("invalid suit: {v}"),
        }
    }

    /// Single-character representation: 'C', 'D', 'H', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from a small integer 0..=12.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 13`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => panic!("invalid rank: {v}"),
        }
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Generate a standard 52-card deck in a fixed order.
///
/// Ranks vary in the outer loop and suits in the inner one; the exact
/// pre-shuffle order does not matter for correctness, only that all 52
/// cards appear exactly once.
pub fn standard_deck() -> [Card; CARDS_PER_DECK as usize] {
    let mut cards = [Card(0); CARDS_PER_DECK as usize];
    let mut i = 0usize;
    for &rank in Rank::ALL.iter() {
        for &suit in Suit::ALL.iter() {
            cards[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    cards
}

/// An ordered pile of cards to deal a game from.
///
/// A fresh deck starts in `standard_deck()` order; callers are expected
/// to `shuffle` it before dealing. Dealing removes cards from the tail
/// of the pile.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 52-card deck in the fixed `standard_deck()` order.
    pub fn new() -> Self {
        Deck {
            cards: standard_deck().to_vec(),
        }
    }

    /// Build a deck from an exact card sequence.
    ///
    /// Useful for replaying a known deal; the cards are used as-is, in
    /// the given order, with the tail dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Number of cards remaining in the deck.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the remaining cards into a uniformly random permutation.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the last `n` cards, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of remaining cards. Callers own
    /// the deal plan; over-dealing is a programmer error, not a runtime
    /// condition.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(
            n <= self.cards.len(),
            "dealt {n} cards with only {} remaining",
            self.cards.len()
        );
        self.cards.split_off(self.cards.len() - n)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn card_index_round_trip() {
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                let c = Card::new(suit, rank);
                assert!(c.index() < CARDS_PER_DECK);
                assert_eq!(c.suit(), suit);
                assert_eq!(c.rank(), rank);

                let idx = c.index();
                let c2 = Card::from_index(idx);
                assert_eq!(c2, c);
            }
        }
    }

    #[test]
    fn suit_from_u8_and_short_char() {
        assert_eq!(Suit::from_u8(0), Suit::Clubs);
        assert_eq!(Suit::from_u8(1), Suit::Diamonds);
        assert_eq!(Suit::from_u8(2), Suit::Hearts);
        assert_eq!(Suit::from_u8(3), Suit::Spades);

        assert_eq!(Suit::Clubs.short_char(), 'C');
        assert_eq!(Suit::Diamonds.short_char(), 'D');
        assert_eq!(Suit::Hearts.short_char(), 'H');
        assert_eq!(Suit::Spades.short_char(), 'S');
    }

    #[test]
    fn rank_from_u8_and_number() {
        for (i, &rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(Rank::from_u8(i as u8), rank);
            assert_eq!(rank.number(), i as u8 + 1);
        }
    }

    #[test]
    fn king_detection() {
        for &suit in Suit::ALL.iter() {
            assert!(Card::new(suit, Rank::King).is_king());
            assert!(!Card::new(suit, Rank::Queen).is_king());
            assert!(!Card::new(suit, Rank::Ace).is_king());
        }
    }

    #[test]
    fn short_str_and_display() {
        let ah = Card::new(Suit::Hearts, Rank::Ace);
        let td = Card::new(Suit::Diamonds, Rank::Ten);
        let ks = Card::new(Suit::Spades, Rank::King);
        let seven_clubs = Card::new(Suit::Clubs, Rank::Seven);

        assert_eq!(ah.short_str(), "AH");
        assert_eq!(td.short_str(), "TD");
        assert_eq!(ks.short_str(), "KS");
        assert_eq!(seven_clubs.short_str(), "7C");

        assert_eq!(format!("{ah}"), "AH");
        assert_eq!(format!("{ks}"), "KS");
    }

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), CARDS_PER_DECK as usize);

        // Ensure all indices 0..51 appear exactly once.
        let mut seen = [false; CARDS_PER_DECK as usize];
        for card in deck.iter() {
            let idx = card.index() as usize;
            assert!(!seen[idx], "duplicate card index {idx}");
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn shuffle_preserves_the_card_multiset() {
        let mut deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), CARDS_PER_DECK as usize);
        let mut seen = [false; CARDS_PER_DECK as usize];
        while !deck.is_empty() {
            let card = deck.deal(1)[0];
            let idx = card.index() as usize;
            assert!(!seen[idx], "duplicate card index {idx} after shuffle");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn seeded_shuffles_reproduce() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut StdRng::seed_from_u64(99));
        b.shuffle(&mut StdRng::seed_from_u64(99));
        assert_eq!(a.deal(52), b.deal(52));
    }

    #[test]
    fn deal_takes_cards_off_the_tail_in_order() {
        let mut deck = Deck::from_cards(vec![
            Card::from_index(0),
            Card::from_index(1),
            Card::from_index(2),
            Card::from_index(3),
        ]);

        let hand = deck.deal(2);
        assert_eq!(hand, vec![Card::from_index(2), Card::from_index(3)]);
        assert_eq!(deck.len(), 2);

        let rest = deck.deal(2);
        assert_eq!(rest, vec![Card::from_index(0), Card::from_index(1)]);
        assert!(deck.is_empty());
    }

    #[test]
    #[should_panic(expected = "dealt")]
    fn dealing_past_the_end_panics() {
        let mut deck = Deck::from_cards(vec![Card::from_index(0)]);
        let _ = deck.deal(2);
    }
}
