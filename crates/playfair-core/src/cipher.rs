//! Digram transformation over the square, and the cipher's public surface.

use crate::digram::{segment, Digram};
use crate::error::PlayfairError;
use crate::grid::{column_of, row_of, Grid};

/// Transform direction for one pass over the digrams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encrypt,
    Decrypt,
}

/// Playfair cipher over one keyword-derived square and one segmented message.
///
/// The square is immutable once built; replacing the message re-runs
/// segmentation against it, and replacing the keyword rebuilds the square.
pub struct Playfair {
    grid: Grid,
    digrams: Vec<Digram>,
}

impl Playfair {
    /// Builds a cipher holding `message` segmented against the square
    /// derived from `keyword`.
    pub fn new(message: &str, keyword: &str) -> Result<Self, PlayfairError> {
        let grid = Grid::from_keyword(keyword)?;
        let digrams = segment(message, grid.fold());
        Ok(Self { grid, digrams })
    }

    /// Encrypts the current message against the square.
    pub fn encrypt(&self) -> String {
        self.run(Mode::Encrypt)
    }

    /// Decrypts the current message against the square.
    pub fn decrypt(&self) -> String {
        self.run(Mode::Decrypt)
    }

    /// Replaces the message, keeping the square.
    pub fn set_message(&mut self, message: &str) {
        self.digrams = segment(message, self.grid.fold());
    }

    /// Rebuilds the square from a new keyword and clears the message.
    ///
    /// The previous digrams were folded for the old square, so the message
    /// must be supplied again with [`set_message`](Self::set_message). On
    /// error the cipher keeps its previous square and message.
    pub fn set_keyword(&mut self, keyword: &str) -> Result<(), PlayfairError> {
        self.grid = Grid::from_keyword(keyword)?;
        self.digrams.clear();
        Ok(())
    }

    /// The square this cipher transforms against.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The segmented message.
    pub fn digrams(&self) -> &[Digram] {
        &self.digrams
    }

    /// Renders the square as five space-separated rows, for diagnostics.
    pub fn render_grid(&self) -> String {
        self.grid.to_string()
    }

    fn run(&self, mode: Mode) -> String {
        let mut result = String::with_capacity(self.digrams.len() * 2);
        for &Digram(first, second) in &self.digrams {
            let (a, b) = transform(&self.grid, first, second, mode);
            result.push(a as char);
            result.push(b as char);
        }
        result
    }
}

/// Shifts a 1-based row or column coordinate by one cell with wraparound.
fn step(coordinate: usize, mode: Mode) -> usize {
    match mode {
        Mode::Encrypt => {
            if coordinate == 5 {
                1
            } else {
                coordinate + 1
            }
        }
        Mode::Decrypt => {
            if coordinate == 1 {
                5
            } else {
                coordinate - 1
            }
        }
    }
}

/// Applies the same-row, same-column or rectangle rule to one digram.
///
/// Segmentation folds every message letter onto the square's alphabet, so
/// both lookups are infallible.
fn transform(grid: &Grid, first: u8, second: u8, mode: Mode) -> (u8, u8) {
    let index1 = grid
        .position(first)
        .expect("sanitized letter is on the square");
    let index2 = grid
        .position(second)
        .expect("sanitized letter is on the square");

    let (row1, column1) = (row_of(index1), column_of(index1));
    let (row2, column2) = (row_of(index2), column_of(index2));

    if row1 == row2 {
        // same row: shift along the row
        (
            grid.at(row1, step(column1, mode)),
            grid.at(row2, step(column2, mode)),
        )
    } else if column1 == column2 {
        // same column: shift along the column
        (
            grid.at(step(row1, mode), column1),
            grid.at(step(row2, mode), column2),
        )
    } else {
        // rectangle: take the opposite corners, row-first; self-inverse
        (grid.at(row1, column2), grid.at(row2, column1))
    }
}
