//! Human-readable rendering of the board.
//!
//! These functions produce a stable, plain-text view of a `Board` for the
//! interactive CLI and for debugging. Slot numbers are shown alongside
//! each region because they double as the command surface: players name
//! moves by the same indices the engine uses.

use crate::board::{Board, NUM_CELLS, NUM_TOWERS};
use crate::card::Suit;

/// Render the foundation row, one pile per suit in slot order 14..=17.
///
/// Only the top card of each pile is shown; an empty foundation renders
/// as `[  ]`.
pub fn render_foundations(board: &Board) -> String {
    let mut s = String::new();
    s.push_str("Foundations (14-17): ");
    for &suit in Suit::ALL.iter() {
        match board.foundation(suit).last() {
            Some(card) => {
                s.push('[');
                s.push_str(&card.short_str());
                s.push_str("] ");
            }
            None => s.push_str("[  ] "),
        }
    }
    s.trim_end().to_string()
}

/// Render the four holding cells in slot order 10..=13.
pub fn render_cells(board: &Board) -> String {
    let mut s = String::new();
    s.push_str("Cells (10-13):       ");
    for i in 0..NUM_CELLS {
        match board.cell(i).last() {
            Some(card) => {
                s.push('[');
                s.push_str(&card.short_str());
                s.push_str("] ");
            }
            None => s.push_str("[  ] "),
        }
    }
    s.trim_end().to_string()
}

/// Render all ten towers as a multi-line grid.
///
/// Columns are top-justified: the first row under the header holds each
/// tower's bottom card, and the lowest non-empty row of a column is its
/// playable edge. Each cell is four characters wide.
pub fn render_towers(board: &Board) -> String {
    let mut s = String::new();
    s.push_str("Towers:\n");

    for i in 0..NUM_TOWERS {
        s.push_str(&format!("{i:>4}"));
    }
    s.push('\n');

    let tallest = (0..NUM_TOWERS)
        .map(|i| board.tower(i).len())
        .max()
        .unwrap_or(0);
    for row in 0..tallest {
        for i in 0..NUM_TOWERS {
            match board.tower(i).get(row) {
                Some(card) => s.push_str(&format!("{:>4}", card.short_str())),
                None => s.push_str("    "),
            }
        }
        // No trailing spaces after the last occupied column.
        while s.ends_with(' ') {
            s.pop();
        }
        s.push('\n');
    }
    s
}

/// Render the whole board: foundations, cells, then the tower grid.
pub fn render_board(board: &Board) -> String {
    format!(
        "{}\n{}\n\n{}",
        render_foundations(board),
        render_cells(board),
        render_towers(board)
    )
}

/// Print `render_board` to stdout.
pub fn print_board(board: &Board) {
    println!("{}", render_board(board));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::foundation_slot_index;
    use crate::card::{Card, Rank};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(suit, Rank::from_u8(rank - 1))
    }

    #[test]
    fn empty_board_renders_empty_markers() {
        let board = Board::empty();
        assert_eq!(
            render_foundations(&board),
            "Foundations (14-17): [  ] [  ] [  ] [  ]"
        );
        assert_eq!(
            render_cells(&board),
            "Cells (10-13):       [  ] [  ] [  ] [  ]"
        );
    }

    #[test]
    fn foundations_show_only_their_top_card() {
        let mut board = Board::empty();
        board.push_card(foundation_slot_index(Suit::Hearts), card(1, Suit::Hearts));
        board.push_card(foundation_slot_index(Suit::Hearts), card(2, Suit::Hearts));
        assert_eq!(
            render_foundations(&board),
            "Foundations (14-17): [  ] [  ] [2H] [  ]"
        );
    }

    #[test]
    fn towers_render_bottom_first() {
        let mut board = Board::empty();
        board.push_card(0, card(13, Suit::Spades));
        board.push_card(0, card(12, Suit::Spades));
        board.push_card(3, card(7, Suit::Diamonds));

        let grid = render_towers(&board);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "Towers:");
        // Row one: bottoms of towers 0 and 3.
        assert!(lines[2].contains("KS"));
        assert!(lines[2].contains("7D"));
        // Row two: only tower 0 is two cards tall.
        assert!(lines[3].contains("QS"));
        assert!(!lines[3].contains("7D"));
    }
}
