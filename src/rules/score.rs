//! End-of-game scoring.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::boards::Table;
use crate::cards::Color;

/// Gold coins worth one point.
const GOLD_PER_POINT: u32 = 3;

/// Where points come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreCategory {
    Civil,
    Science,
    Military,
    Trade,
    Guild,
    Wonder,
    Gold,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 7] = [
        ScoreCategory::Civil,
        ScoreCategory::Science,
        ScoreCategory::Military,
        ScoreCategory::Trade,
        ScoreCategory::Guild,
        ScoreCategory::Wonder,
        ScoreCategory::Gold,
    ];

    fn of_card(color: Color) -> Self {
        match color {
            Color::Yellow => ScoreCategory::Trade,
            Color::Purple => ScoreCategory::Guild,
            Color::Blue | Color::Brown | Color::Grey | Color::Green | Color::Red => {
                ScoreCategory::Civil
            }
        }
    }
}

/// Final points of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub seat: usize,
    pub user_name: String,
    /// Gold left at the end, used to break ties.
    pub gold: u32,
    pub points: FxHashMap<ScoreCategory, i32>,
    /// 1 for the winner. Equal totals and equal gold share a rank.
    pub rank: usize,
}

impl PlayerScore {
    #[must_use]
    pub fn get(&self, category: ScoreCategory) -> i32 {
        self.points.get(&category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        self.points.values().sum()
    }

    fn add(&mut self, category: ScoreCategory, points: i32) {
        *self.points.entry(category).or_insert(0) += points;
    }
}

/// Scores of every player, best first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub scores: Vec<PlayerScore>,
}

impl ScoreBoard {
    /// Score every board on `table`. `user_names` follow seat order.
    #[must_use]
    pub fn compute(table: &Table, user_names: &[String]) -> Self {
        let mut scores: Vec<PlayerScore> = table
            .boards()
            .map(|board| {
                let seat = board.seat();
                let mut score = PlayerScore {
                    seat,
                    user_name: user_names.get(seat).cloned().unwrap_or_default(),
                    gold: board.gold(),
                    points: FxHashMap::default(),
                    rank: 0,
                };
                for category in ScoreCategory::ALL {
                    score.add(category, 0);
                }
                for card in board.cards() {
                    let points: i32 = card
                        .effects
                        .iter()
                        .map(|effect| effect.compute_points(table, seat))
                        .sum();
                    score.add(ScoreCategory::of_card(card.color), points);
                }
                score.add(ScoreCategory::Science, board.science().compute_points());
                score.add(ScoreCategory::Military, board.military().total_points());
                score.add(ScoreCategory::Wonder, board.wonder().compute_points(table, seat));
                score.add(ScoreCategory::Gold, (board.gold() / GOLD_PER_POINT) as i32);
                score
            })
            .collect();

        scores.sort_by(|a, b| b.total().cmp(&a.total()).then(b.gold.cmp(&a.gold)));
        for i in 0..scores.len() {
            scores[i].rank = if i > 0
                && scores[i].total() == scores[i - 1].total()
                && scores[i].gold == scores[i - 1].gold
            {
                scores[i - 1].rank
            } else {
                i + 1
            };
        }
        Self { scores }
    }

    /// Players ranked first.
    pub fn winners(&self) -> impl Iterator<Item = &PlayerScore> {
        self.scores.iter().filter(|score| score.rank == 1)
    }

    #[must_use]
    pub fn for_seat(&self, seat: usize) -> Option<&PlayerScore> {
        self.scores.iter().find(|score| score.seat == seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(seat: usize, gold: u32, civil: i32) -> PlayerScore {
        let mut score = PlayerScore {
            seat,
            user_name: format!("user{}", seat),
            gold,
            points: FxHashMap::default(),
            rank: 0,
        };
        score.add(ScoreCategory::Civil, civil);
        score
    }

    #[test]
    fn test_total_and_missing_category() {
        let mut s = score(0, 4, 5);
        s.add(ScoreCategory::Military, -2);
        assert_eq!(s.total(), 3);
        assert_eq!(s.get(ScoreCategory::Guild), 0);
    }

    #[test]
    fn test_card_categories() {
        assert_eq!(ScoreCategory::of_card(Color::Blue), ScoreCategory::Civil);
        assert_eq!(ScoreCategory::of_card(Color::Yellow), ScoreCategory::Trade);
        assert_eq!(ScoreCategory::of_card(Color::Purple), ScoreCategory::Guild);
    }
}
