//! This module contains the word search generation logic.
//!
//! The [WordPlacer] embeds a list of words into a square letter grid by
//! randomized placement attempts and fills the remaining cells with noise
//! letters. The resulting [WordSearchPuzzle] records where each word was
//! hidden, which the [SelectionMatcher](crate::matcher::SelectionMatcher)
//! uses to verify player selections.

use crate::Coord;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The eight compass unit vectors along which words may be written, as
/// (row delta, column delta) pairs.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1)
];

/// The number of placement attempts granted per word is the cell count of the
/// grid multiplied with this factor.
const ATTEMPT_FACTOR: usize = 5;

/// The predefined Super Mario themed word lists shipped with the engine. A
/// caller may pass any word list to [WordPlacer::place]; these are the sets
/// the hosting UI cycles through, selectable at random with
/// [WordPlacer::random_word_set].
pub const WORD_SETS: [[&str; 10]; 5] = [
    ["Mario", "Luigi", "Peach", "Bowser", "Yoshi", "Toad", "Goomba", "Koopa",
        "Boo", "Star"],
    ["Wario", "Waluigi", "Daisy", "Rosalina", "BowserJr", "ShyGuy", "Lakitu",
        "Tanooki", "FireFlower", "Mushroom"],
    ["DonkeyKong", "Diddy", "Pauline", "Birdo", "HammerBro", "Piranha",
        "ChainChomp", "BulletBill", "Thwomp", "BobOmb"],
    ["WarpPipe", "SuperStar", "1Up", "Shell", "Kart", "RainbowRoad", "Galaxy",
        "Castle", "Coin", "Block"],
    ["Boomerang", "Propeller", "Penguin", "Cappy", "Frog", "Cat", "BoomBoom",
        "Kamek", "Nabbit", "Sprixie"]
];

/// A word that was successfully embedded into a word search grid, together
/// with the cells it occupies, in letter order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlacedWord {
    word: String,
    positions: Vec<Coord>
}

impl PlacedWord {

    /// Gets the placed word, in uppercase.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Gets the cells this word occupies, one [Coord] per letter, in letter
    /// order.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    #[cfg(test)]
    pub(crate) fn from_parts(word: String, positions: Vec<Coord>)
            -> PlacedWord {
        PlacedWord {
            word,
            positions
        }
    }
}

/// A complete word search puzzle consisting of a square letter grid, the
/// uppercased word list, and for each word either a [PlacedWord] record or an
/// entry in the dropped list if no placement attempt succeeded.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WordSearchPuzzle {
    size: usize,
    grid: Vec<char>,
    words: Vec<String>,
    placed: Vec<PlacedWord>,
    dropped: Vec<String>
}

impl WordSearchPuzzle {

    /// Gets the side length of the square letter grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the letter grid in row-major order. Its length is the square of
    /// [WordSearchPuzzle::size].
    pub fn grid(&self) -> &[char] {
        &self.grid
    }

    /// Gets the letter at the specified coordinate, or `None` if the
    /// coordinate is outside the grid.
    pub fn letter(&self, coord: Coord) -> Option<char> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }

        Some(self.grid[crate::index(coord.col, coord.row, self.size)])
    }

    /// Gets all requested words in uppercase, in input order, including those
    /// that could not be placed.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Gets the words that were embedded into the grid, with their cells.
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Gets the words for which every placement attempt failed. These appear
    /// in [WordSearchPuzzle::words] but have no cells in the grid, so the
    /// hosting UI can decide whether to hide them or request a larger grid.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    #[cfg(test)]
    pub(crate) fn from_parts(size: usize, grid: Vec<char>,
            words: Vec<String>, placed: Vec<PlacedWord>,
            dropped: Vec<String>) -> WordSearchPuzzle {
        WordSearchPuzzle {
            size,
            grid,
            words,
            placed,
            dropped
        }
    }
}

/// A generator for [WordSearchPuzzle]s. Each word is placed by repeatedly
/// picking a random direction and start cell until a placement fits or the
/// attempt budget runs out. Occupied cells are acceptable if they already
/// hold the required letter, so words may cross.
pub struct WordPlacer<R: Rng> {
    rng: R
}

impl WordPlacer<ThreadRng> {

    /// Creates a new word placer using the [thread_rng](rand::thread_rng).
    pub fn new_default() -> WordPlacer<ThreadRng> {
        WordPlacer::new(rand::thread_rng())
    }
}

impl<R: Rng> WordPlacer<R> {

    /// Creates a new word placer using the given random number generator.
    pub fn new(rng: R) -> WordPlacer<R> {
        WordPlacer {
            rng
        }
    }

    /// Picks one of the predefined [WORD_SETS] uniformly at random.
    pub fn random_word_set(&mut self) -> &'static [&'static str; 10] {
        &WORD_SETS[self.rng.gen_range(0..WORD_SETS.len())]
    }

    fn fits(grid: &[Option<char>], size: usize, letters: &[char],
            start_row: isize, start_col: isize, direction: (isize, isize))
            -> bool {
        let (delta_row, delta_col) = direction;
        let mut row = start_row;
        let mut col = start_col;

        for &letter in letters {
            if row < 0 || col < 0 ||
                    row >= size as isize || col >= size as isize {
                return false;
            }

            let index =
                crate::index(col as usize, row as usize, size);

            if let Some(occupied) = grid[index] {
                if occupied != letter {
                    return false;
                }
            }

            row += delta_row;
            col += delta_col;
        }

        true
    }

    fn place_word(&mut self, grid: &mut [Option<char>], size: usize,
            word: &str) -> Option<PlacedWord> {
        let letters: Vec<char> = word.chars().collect();
        let attempts = size * size * ATTEMPT_FACTOR;

        for _ in 0..attempts {
            let direction =
                DIRECTIONS[self.rng.gen_range(0..DIRECTIONS.len())];
            let start_row = self.rng.gen_range(0..size) as isize;
            let start_col = self.rng.gen_range(0..size) as isize;

            if !WordPlacer::<R>::fits(grid, size, &letters, start_row,
                    start_col, direction) {
                continue;
            }

            let (delta_row, delta_col) = direction;
            let mut row = start_row;
            let mut col = start_col;
            let mut positions = Vec::with_capacity(letters.len());

            for &letter in &letters {
                let index =
                    crate::index(col as usize, row as usize, size);
                grid[index] = Some(letter);
                positions.push(Coord::new(row as usize, col as usize));
                row += delta_row;
                col += delta_col;
            }

            return Some(PlacedWord {
                word: word.to_owned(),
                positions
            });
        }

        None
    }

    fn noise_letter(&mut self) -> char {
        (b'A' + self.rng.gen_range(0..26u8)) as char
    }

    /// Generates a word search puzzle of the given side length containing
    /// the given words. Words are uppercased first and processed in input
    /// order; a word whose placement attempts all fail ends up in
    /// [WordSearchPuzzle::dropped] rather than in the grid. Cells not covered
    /// by any word are filled with uniformly random letters A to Z.
    pub fn place(&mut self, words: &[&str], size: usize) -> WordSearchPuzzle {
        let words: Vec<String> =
            words.iter().map(|word| word.to_uppercase()).collect();
        let mut grid: Vec<Option<char>> = vec![None; size * size];
        let mut placed = Vec::new();
        let mut dropped = Vec::new();

        for word in &words {
            match self.place_word(&mut grid, size, word) {
                Some(placed_word) => placed.push(placed_word),
                None => dropped.push(word.clone())
            }
        }

        let grid = grid.into_iter()
            .map(|cell| cell.unwrap_or_else(|| self.noise_letter()))
            .collect();

        WordSearchPuzzle {
            size,
            grid,
            words,
            placed,
            dropped
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_placer(seed: u64) -> WordPlacer<ChaCha8Rng> {
        WordPlacer::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn words_are_uppercased() {
        let mut placer = seeded_placer(0);
        let puzzle = placer.place(&["Mario", "luigi"], 12);

        assert_eq!(vec!["MARIO".to_owned(), "LUIGI".to_owned()],
            puzzle.words().to_vec());
    }

    #[test]
    fn every_cell_is_an_uppercase_letter() {
        let mut placer = seeded_placer(1);
        let puzzle = placer.place(&WORD_SETS[0], 12);

        assert_eq!(144, puzzle.grid().len());

        for &letter in puzzle.grid() {
            assert!(letter.is_ascii_uppercase(),
                "Cell holds {:?}, which is not an uppercase letter.", letter);
        }
    }

    #[test]
    fn placed_positions_match_grid_letters() {
        for seed in 0..10 {
            let mut placer = seeded_placer(seed);
            let puzzle = placer.place(&WORD_SETS[0], 12);

            for placed in puzzle.placed() {
                assert_eq!(placed.word().chars().count(),
                    placed.positions().len());

                for (letter, &position) in
                        placed.word().chars().zip(placed.positions()) {
                    assert_eq!(Some(letter), puzzle.letter(position));
                }
            }
        }
    }

    #[test]
    fn placed_positions_are_collinear() {
        let mut placer = seeded_placer(2);
        let puzzle = placer.place(&WORD_SETS[1], 12);

        for placed in puzzle.placed() {
            let positions = placed.positions();

            if positions.len() < 2 {
                continue;
            }

            let delta_row =
                positions[1].row as isize - positions[0].row as isize;
            let delta_col =
                positions[1].col as isize - positions[0].col as isize;

            assert!(DIRECTIONS.contains(&(delta_row, delta_col)));

            for window in positions.windows(2) {
                assert_eq!(delta_row,
                    window[1].row as isize - window[0].row as isize);
                assert_eq!(delta_col,
                    window[1].col as isize - window[0].col as isize);
            }
        }
    }

    #[test]
    fn every_word_is_placed_or_dropped() {
        let mut placer = seeded_placer(3);
        let puzzle = placer.place(&WORD_SETS[2], 12);

        assert_eq!(puzzle.words().len(),
            puzzle.placed().len() + puzzle.dropped().len());

        for placed in puzzle.placed() {
            assert!(puzzle.words().contains(&placed.word().to_owned()));
        }

        for dropped in puzzle.dropped() {
            assert!(puzzle.words().contains(dropped));
        }
    }

    #[test]
    fn large_grid_places_all_words() {
        // The longest word in this set has 6 letters, which fits in every
        // direction from most start cells of a 12x12 grid, so with 720
        // attempts per word a drop would indicate a placement bug rather
        // than bad luck.
        for seed in 0..10 {
            let mut placer = seeded_placer(seed);
            let puzzle = placer.place(&WORD_SETS[0], 12);

            assert!(puzzle.dropped().is_empty(),
                "Dropped words on a large grid: {:?}", puzzle.dropped());
        }
    }

    #[test]
    fn word_longer_than_grid_is_dropped() {
        let mut placer = seeded_placer(4);
        let puzzle = placer.place(&["RainbowRoad"], 4);

        assert!(puzzle.placed().is_empty());
        assert_eq!(vec!["RAINBOWROAD".to_owned()], puzzle.dropped().to_vec());
    }

    #[test]
    fn same_seed_same_puzzle() {
        let puzzle_1 = seeded_placer(5).place(&WORD_SETS[3], 12);
        let puzzle_2 = seeded_placer(5).place(&WORD_SETS[3], 12);

        assert_eq!(puzzle_1, puzzle_2);
    }

    #[test]
    fn letter_out_of_bounds_is_none() {
        let mut placer = seeded_placer(6);
        let puzzle = placer.place(&WORD_SETS[4], 12);

        assert_eq!(None, puzzle.letter(Coord::new(12, 0)));
        assert_eq!(None, puzzle.letter(Coord::new(0, 12)));
        assert!(puzzle.letter(Coord::new(11, 11)).is_some());
    }

    #[test]
    fn random_word_set_is_predefined() {
        let mut placer = seeded_placer(7);

        for _ in 0..20 {
            let set = placer.random_word_set();
            assert!(WORD_SETS.iter().any(|candidate| candidate == set));
        }
    }

    #[test]
    fn serde_round_trip() {
        let mut placer = seeded_placer(9);
        let puzzle = placer.place(&WORD_SETS[0], 12);
        let json = serde_json::to_string(&puzzle).unwrap();
        let deserialized: WordSearchPuzzle =
            serde_json::from_str(&json).unwrap();

        assert_eq!(puzzle, deserialized);
    }
}
