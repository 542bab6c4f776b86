use crate::{Board, Mark};

/// Builds a board from three rows of `X`, `O` and `.`.
pub fn board(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                'X' => assert!(board.place(row, col, Mark::X)),
                'O' => assert!(board.place(row, col, Mark::O)),
                _ => {}
            }
        }
    }
    board
}
