//! Science symbols and their scoring.
//!
//! Each symbol type scores the square of its count, and each complete set
//! of the three types scores 7 more. Jokers count as any symbol and are
//! resolved to whatever maximises the score.

use serde::{Deserialize, Serialize};

const POINTS_PER_SET: i32 = 7;

/// The three science symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScienceType {
    Compass,
    Wheel,
    Tablet,
}

/// Science symbols held by a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Science {
    #[serde(default)]
    pub compasses: u32,
    #[serde(default)]
    pub wheels: u32,
    #[serde(default)]
    pub tablets: u32,
    #[serde(default)]
    pub jokers: u32,
}

impl Science {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single symbol.
    #[must_use]
    pub fn of(science_type: ScienceType) -> Self {
        let mut science = Self::new();
        science.add(science_type, 1);
        science
    }

    /// A single joker.
    #[must_use]
    pub fn joker() -> Self {
        Self {
            jokers: 1,
            ..Self::default()
        }
    }

    pub fn add(&mut self, science_type: ScienceType, quantity: u32) {
        match science_type {
            ScienceType::Compass => self.compasses += quantity,
            ScienceType::Wheel => self.wheels += quantity,
            ScienceType::Tablet => self.tablets += quantity,
        }
    }

    pub fn add_all(&mut self, other: &Science) {
        self.compasses += other.compasses;
        self.wheels += other.wheels;
        self.tablets += other.tablets;
        self.jokers += other.jokers;
    }

    #[must_use]
    pub fn get(&self, science_type: ScienceType) -> u32 {
        match science_type {
            ScienceType::Compass => self.compasses,
            ScienceType::Wheel => self.wheels,
            ScienceType::Tablet => self.tablets,
        }
    }

    /// Best score over every assignment of the jokers.
    #[must_use]
    pub fn compute_points(&self) -> i32 {
        let jokers = self.jokers;
        let mut best = 0;
        for on_compass in 0..=jokers {
            for on_wheel in 0..=jokers - on_compass {
                let on_tablet = jokers - on_compass - on_wheel;
                best = best.max(score(
                    self.compasses + on_compass,
                    self.wheels + on_wheel,
                    self.tablets + on_tablet,
                ));
            }
        }
        best
    }
}

fn score(compasses: u32, wheels: u32, tablets: u32) -> i32 {
    let sets = compasses.min(wheels).min(tablets);
    let squares = compasses * compasses + wheels * wheels + tablets * tablets;
    squares as i32 + POINTS_PER_SET * sets as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science(compasses: u32, wheels: u32, tablets: u32, jokers: u32) -> Science {
        Science {
            compasses,
            wheels,
            tablets,
            jokers,
        }
    }

    #[test]
    fn test_empty_science_scores_nothing() {
        assert_eq!(Science::new().compute_points(), 0);
    }

    #[test]
    fn test_squares_and_sets() {
        assert_eq!(science(1, 0, 0, 0).compute_points(), 1);
        assert_eq!(science(1, 1, 1, 0).compute_points(), 10);
        assert_eq!(science(2, 2, 1, 0).compute_points(), 16);
        assert_eq!(science(3, 0, 0, 0).compute_points(), 9);
    }

    #[test]
    fn test_jokers_maximise() {
        // 2/1/1 = 4+1+1+7
        assert_eq!(science(1, 1, 1, 1).compute_points(), 13);
        // completing a set beats stacking
        assert_eq!(science(1, 1, 0, 1).compute_points(), 10);
        assert_eq!(science(0, 0, 0, 2).compute_points(), 4);
    }

    #[test]
    fn test_add_all() {
        let mut total = Science::of(ScienceType::Compass);
        total.add_all(&Science::of(ScienceType::Tablet));
        total.add_all(&Science::joker());
        assert_eq!(total, science(1, 0, 1, 1));
        assert_eq!(total.get(ScienceType::Tablet), 1);
    }
}
