//! Scoring rules.
//!
//! Every rule is a pure function of the five dice faces. Repeat rules read
//! the face frequency table; straights only test which faces are present.

use crate::category::Category;
use crate::dice::{DICE_COUNT, FACES};

const SMALL_STRAIGHT_POINTS: u16 = 30;
const LARGE_STRAIGHT_POINTS: u16 = 40;
const FULL_HOUSE_POINTS: u16 = 25;
const YAHTZEE_POINTS: u16 = 50;

const SMALL_STRAIGHTS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
const LARGE_STRAIGHTS: [[u8; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];

/// Frequency table mapping each face to the number of dice showing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceCounts {
    counts: [u8; FACES as usize],
    sum: u16,
}

impl FaceCounts {
    /// Builds the table in a single pass over a hand of dice.
    ///
    /// Faces outside `1..=6` are ignored.
    #[must_use]
    pub fn new(faces: &[u8; DICE_COUNT]) -> Self {
        let mut table = Self::default();
        for &face in faces {
            if (1..=FACES).contains(&face) {
                table.counts[usize::from(face - 1)] += 1;
                table.sum += u16::from(face);
            }
        }
        table
    }

    /// Returns how many dice show `face`.
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        if (1..=FACES).contains(&face) {
            self.counts[usize::from(face - 1)]
        } else {
            0
        }
    }

    /// Returns whether some die shows `face`.
    #[must_use]
    pub fn contains(&self, face: u8) -> bool {
        self.count(face) > 0
    }

    /// Returns the sum of all counted faces.
    #[must_use]
    pub const fn sum(&self) -> u16 {
        self.sum
    }

    /// Returns the highest number of dice sharing one face.
    #[must_use]
    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Returns whether some face appears exactly `n` times.
    #[must_use]
    pub fn has_exact(&self, n: u8) -> bool {
        self.counts.contains(&n)
    }

    fn contains_all(&self, faces: &[u8]) -> bool {
        faces.iter().all(|&face| self.contains(face))
    }
}

/// Scores `faces` in `category`.
#[must_use]
pub fn evaluate(category: Category, faces: &[u8; DICE_COUNT]) -> u16 {
    let counts = FaceCounts::new(faces);

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => category.face().map_or(0, |face| upper(&counts, face)),
        Category::ThreeOfAKind => repeats(&counts, 3),
        Category::FourOfAKind => repeats(&counts, 4),
        Category::Yahtzee => yahtzee(&counts),
        Category::SmallStraight => small_straight(&counts),
        Category::LargeStraight => large_straight(&counts),
        Category::FullHouse => full_house(&counts),
        Category::Pair | Category::TwoPairs | Category::Chance => 0,
    }
}

fn upper(counts: &FaceCounts, face: u8) -> u16 {
    u16::from(counts.count(face)) * u16::from(face)
}

fn repeats(counts: &FaceCounts, n: u8) -> u16 {
    if counts.max_count() >= n {
        counts.sum()
    } else {
        0
    }
}

fn yahtzee(counts: &FaceCounts) -> u16 {
    if counts.max_count() >= DICE_COUNT as u8 {
        YAHTZEE_POINTS
    } else {
        0
    }
}

fn small_straight(counts: &FaceCounts) -> u16 {
    if SMALL_STRAIGHTS.iter().any(|run| counts.contains_all(run)) {
        SMALL_STRAIGHT_POINTS
    } else {
        0
    }
}

fn large_straight(counts: &FaceCounts) -> u16 {
    if LARGE_STRAIGHTS.iter().any(|run| counts.contains_all(run)) {
        LARGE_STRAIGHT_POINTS
    } else {
        0
    }
}

fn full_house(counts: &FaceCounts) -> u16 {
    if counts.has_exact(2) && counts.has_exact(3) {
        FULL_HOUSE_POINTS
    } else {
        0
    }
}
