//! Polybius square construction from a keyword.

use core::fmt;

use crate::error::PlayfairError;

/// Letter fold merging one alphabet letter into another so 26 letters fit
/// the 25 cells of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fold {
    /// `j` is written as `i`; the square omits `j`.
    JIntoI,
    /// `i` is written as `j`; the square omits `i`.
    IIntoJ,
    /// Both `i` and `j` occupy cells; `z` is written as `y` instead.
    ZIntoY,
}

impl Fold {
    /// Picks the fold for a deduplicated keyword.
    ///
    /// A keyword holding `i`, `j` and `z` at once leaves no letter that a
    /// single fold can remove, so construction is rejected.
    fn for_keyword(letters: &[u8]) -> Result<Self, PlayfairError> {
        let has_i = letters.contains(&b'i');
        let has_j = letters.contains(&b'j');
        let has_z = letters.contains(&b'z');
        match (has_i, has_j) {
            (true, true) if has_z => Err(PlayfairError::UnresolvableFold),
            (true, true) => Ok(Fold::ZIntoY),
            (false, true) => Ok(Fold::IIntoJ),
            _ => Ok(Fold::JIntoI),
        }
    }

    /// The letter this fold removes from the alphabet.
    fn dropped(self) -> u8 {
        match self {
            Fold::JIntoI => b'j',
            Fold::IIntoJ => b'i',
            Fold::ZIntoY => b'z',
        }
    }

    /// Rewrites a letter to its merge target; all other letters pass through.
    pub fn apply(self, letter: u8) -> u8 {
        match self {
            Fold::JIntoI if letter == b'j' => b'i',
            Fold::IIntoJ if letter == b'i' => b'j',
            Fold::ZIntoY if letter == b'z' => b'y',
            _ => letter,
        }
    }
}

/// Lowercases `text` and drops everything that is not an ASCII letter.
pub(crate) fn sanitize(text: &str) -> Vec<u8> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase() as u8)
        .collect()
}

/// 5×5 Polybius square of 25 distinct lowercase letters.
///
/// Cells are stored row-major and addressed either by linear index or by a
/// 1-based `(row, column)` pair in `[1,5]×[1,5]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; 25],
    fold: Fold,
}

impl Grid {
    /// Builds the square from a raw keyword.
    ///
    /// The keyword is lowercased, stripped of non-letters and deduplicated
    /// keeping first occurrences; it seeds the square, and the rest of the
    /// fold-adjusted alphabet follows in natural order.
    pub fn from_keyword(keyword: &str) -> Result<Self, PlayfairError> {
        let sanitized = sanitize(keyword);
        if sanitized.is_empty() {
            return Err(PlayfairError::EmptyKeyword);
        }

        let mut unique: Vec<u8> = Vec::with_capacity(sanitized.len());
        for letter in sanitized {
            if !unique.contains(&letter) {
                unique.push(letter);
            }
        }

        let fold = Fold::for_keyword(&unique)?;

        // The dropped letter is never part of `unique`, so the keyword plus
        // the remaining alphabet always fills exactly 25 cells.
        let mut cells = [0u8; 25];
        let mut len = 0;
        for &letter in &unique {
            cells[len] = letter;
            len += 1;
        }
        for letter in b'a'..=b'z' {
            if letter == fold.dropped() || unique.contains(&letter) {
                continue;
            }
            cells[len] = letter;
            len += 1;
        }
        debug_assert_eq!(len, 25);

        Ok(Self { cells, fold })
    }

    /// Linear index of a letter, scanning the 25 cells.
    pub(crate) fn position(&self, letter: u8) -> Option<usize> {
        self.cells.iter().position(|&c| c == letter)
    }

    /// Letter at a 1-based `(row, column)` coordinate.
    pub(crate) fn at(&self, row: usize, column: usize) -> u8 {
        self.cells[(row - 1) * 5 + (column - 1)]
    }

    /// The fold this square was built with.
    pub fn fold(&self) -> Fold {
        self.fold
    }

    /// The 25 letters in row-major order.
    pub fn cells(&self) -> &[u8; 25] {
        &self.cells
    }
}

/// 1-based row of a linear cell index.
pub(crate) fn row_of(index: usize) -> usize {
    index / 5 + 1
}

/// 1-based column of a linear cell index.
pub(crate) fn column_of(index: usize) -> usize {
    index % 5 + 1
}

impl fmt::Display for Grid {
    /// Renders five space-separated rows, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..5 {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..5 {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * 5 + column] as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(grid: &Grid) -> String {
        grid.cells().iter().map(|&c| c as char).collect()
    }

    #[test]
    fn playfair_keyword_layout() {
        let grid = Grid::from_keyword("playfair").expect("keyword is valid");
        assert_eq!(letters(&grid), "playfirbcdeghkmnoqstuvwxz");
    }

    #[test]
    fn monarchy_keyword_layout() {
        let grid = Grid::from_keyword("monarchy").expect("keyword is valid");
        assert_eq!(letters(&grid), "monarchybdefgiklpqstuvwxz");
    }

    #[test]
    fn keyword_is_sanitized_and_deduplicated() {
        let plain = Grid::from_keyword("playfair").expect("keyword is valid");
        let noisy = Grid::from_keyword("Play Fair! 123").expect("keyword is valid");
        assert_eq!(plain, noisy);
    }

    #[test]
    fn duplicate_letters_keep_first_occurrence() {
        let grid = Grid::from_keyword("balloon").expect("keyword is valid");
        assert_eq!(&grid.cells()[..5], b"balon");
    }

    #[test]
    fn cells_are_distinct_for_accepted_keywords() {
        for keyword in ["playfair", "monarchy", "emile", "jazz", "jigsaw", "zebra"] {
            let grid = Grid::from_keyword(keyword).expect("keyword is valid");
            let mut seen = std::collections::HashSet::new();
            for &cell in grid.cells() {
                assert!(seen.insert(cell), "duplicate cell in grid for {keyword:?}");
            }
            assert_eq!(seen.len(), 25);
        }
    }

    #[test]
    fn default_fold_drops_j() {
        let grid = Grid::from_keyword("monarchy").expect("keyword is valid");
        assert_eq!(grid.fold(), Fold::JIntoI);
        assert_eq!(grid.position(b'j'), None);
        assert!(grid.position(b'i').is_some());
    }

    #[test]
    fn j_only_keyword_drops_i() {
        let grid = Grid::from_keyword("jazz").expect("keyword is valid");
        assert_eq!(grid.fold(), Fold::IIntoJ);
        assert_eq!(grid.position(b'i'), None);
        assert!(grid.position(b'j').is_some());
    }

    #[test]
    fn keyword_with_i_and_j_drops_z() {
        let grid = Grid::from_keyword("jigsaw").expect("keyword is valid");
        assert_eq!(grid.fold(), Fold::ZIntoY);
        assert_eq!(grid.position(b'z'), None);
        assert!(grid.position(b'i').is_some());
        assert!(grid.position(b'j').is_some());
    }

    #[test]
    fn keyword_with_i_j_and_z_is_rejected() {
        assert_eq!(
            Grid::from_keyword("jinxez"),
            Err(PlayfairError::UnresolvableFold)
        );
    }

    #[test]
    fn empty_keyword_is_rejected() {
        assert_eq!(Grid::from_keyword(""), Err(PlayfairError::EmptyKeyword));
        assert_eq!(Grid::from_keyword("42 !?"), Err(PlayfairError::EmptyKeyword));
    }

    #[test]
    fn fold_rewrites_only_the_merged_letter() {
        assert_eq!(Fold::JIntoI.apply(b'j'), b'i');
        assert_eq!(Fold::JIntoI.apply(b'i'), b'i');
        assert_eq!(Fold::JIntoI.apply(b'z'), b'z');
        assert_eq!(Fold::IIntoJ.apply(b'i'), b'j');
        assert_eq!(Fold::ZIntoY.apply(b'z'), b'y');
        assert_eq!(Fold::ZIntoY.apply(b'j'), b'j');
    }

    #[test]
    fn display_renders_five_rows() {
        let grid = Grid::from_keyword("playfair").expect("keyword is valid");
        assert_eq!(
            grid.to_string(),
            "p l a y f\ni r b c d\ne g h k m\nn o q s t\nu v w x z"
        );
    }

    #[test]
    fn coordinates_match_linear_indices() {
        let grid = Grid::from_keyword("monarchy").expect("keyword is valid");
        for index in 0..25 {
            let letter = grid.cells()[index];
            assert_eq!(grid.at(row_of(index), column_of(index)), letter);
        }
    }
}
