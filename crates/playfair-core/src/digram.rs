//! Message segmentation into digrams.

use crate::grid::{sanitize, Fold};

/// Ordered pair of letters processed as one unit by the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digram(pub u8, pub u8);

/// Padding letter inserted to break doubled letters and pad odd input.
pub const FILLER: u8 = b'x';

/// Fallback padding used when the pair already contains the primary filler.
pub const FILLER_ALT: u8 = b'q';

fn filler_for(letter: u8) -> u8 {
    if letter == FILLER {
        FILLER_ALT
    } else {
        FILLER
    }
}

/// Sanitizes `message`, applies `fold`, and splits the result into digrams.
///
/// The scan consumes two letters at a time. A doubled letter is broken with
/// a filler and the scan advances by one, so the repeated letter starts the
/// next pair; a trailing lone letter is padded the same way. Every sanitized
/// input letter lands in exactly one digram.
pub(crate) fn segment(message: &str, fold: Fold) -> Vec<Digram> {
    let mut letters = sanitize(message);
    for letter in letters.iter_mut() {
        *letter = fold.apply(*letter);
    }

    let mut digrams = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                digrams.push(Digram(first, second));
                i += 2;
            }
            // doubled letter, or nothing left to pair with
            _ => {
                digrams.push(Digram(first, filler_for(first)));
                i += 1;
            }
        }
    }
    digrams
}
