//! Rank tiers resolved from lifetime rank points.

use serde::{Deserialize, Serialize};

/// Competitive rank, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Legend,
}

/// A rank together with the points required to hold it.
#[derive(Debug, Clone, Copy)]
pub struct RankTier {
    pub rank: Rank,
    pub min_points: u32,
}

/// Rank thresholds in ascending order.
pub const RANK_TIERS: &[RankTier] = &[
    RankTier {
        rank: Rank::Bronze,
        min_points: 0,
    },
    RankTier {
        rank: Rank::Silver,
        min_points: 100,
    },
    RankTier {
        rank: Rank::Gold,
        min_points: 250,
    },
    RankTier {
        rank: Rank::Platinum,
        min_points: 500,
    },
    RankTier {
        rank: Rank::Diamond,
        min_points: 1000,
    },
    RankTier {
        rank: Rank::Master,
        min_points: 2000,
    },
    RankTier {
        rank: Rank::Grandmaster,
        min_points: 3500,
    },
    RankTier {
        rank: Rank::Legend,
        min_points: 5000,
    },
];

impl Rank {
    /// Resolves the rank held at a point total. Scans from the top so the
    /// highest qualifying tier wins; everything past the last threshold
    /// stays Legend.
    pub fn for_points(points: u32) -> Rank {
        RANK_TIERS
            .iter()
            .rev()
            .find(|tier| points >= tier.min_points)
            .map(|tier| tier.rank)
            .unwrap_or(Rank::Bronze)
    }

    /// The next tier above a point total, or None at the top rank.
    pub fn next_tier(points: u32) -> Option<&'static RankTier> {
        RANK_TIERS.iter().find(|tier| tier.min_points > points)
    }

    /// Display name, matching the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Bronze => "BRONZE",
            Rank::Silver => "SILVER",
            Rank::Gold => "GOLD",
            Rank::Platinum => "PLATINUM",
            Rank::Diamond => "DIAMOND",
            Rank::Master => "MASTER",
            Rank::Grandmaster => "GRANDMASTER",
            Rank::Legend => "LEGEND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(Rank::for_points(0), Rank::Bronze);
        assert_eq!(Rank::for_points(99), Rank::Bronze);
        assert_eq!(Rank::for_points(100), Rank::Silver);
        assert_eq!(Rank::for_points(249), Rank::Silver);
        assert_eq!(Rank::for_points(250), Rank::Gold);
        assert_eq!(Rank::for_points(499), Rank::Gold);
        assert_eq!(Rank::for_points(500), Rank::Platinum);
        assert_eq!(Rank::for_points(1000), Rank::Diamond);
        assert_eq!(Rank::for_points(2000), Rank::Master);
        assert_eq!(Rank::for_points(3500), Rank::Grandmaster);
        assert_eq!(Rank::for_points(5000), Rank::Legend);
    }

    #[test]
    fn test_rank_saturates_at_legend() {
        assert_eq!(Rank::for_points(5001), Rank::Legend);
        assert_eq!(Rank::for_points(999_999), Rank::Legend);
        assert_eq!(Rank::for_points(u32::MAX), Rank::Legend);
    }

    #[test]
    fn test_rank_never_decreases_with_points() {
        let mut previous = Rank::Bronze;
        for points in 0..6000 {
            let rank = Rank::for_points(points);
            assert!(
                rank >= previous,
                "rank dropped from {:?} to {:?} at {} points",
                previous,
                rank,
                points
            );
            previous = rank;
        }
    }

    #[test]
    fn test_next_tier() {
        let next = Rank::next_tier(0).unwrap();
        assert_eq!(next.rank, Rank::Silver);
        assert_eq!(next.min_points, 100);

        let next = Rank::next_tier(250).unwrap();
        assert_eq!(next.rank, Rank::Platinum);

        assert!(Rank::next_tier(5000).is_none());
        assert!(Rank::next_tier(u32::MAX).is_none());
    }

    #[test]
    fn test_tier_table_is_ascending() {
        for pair in RANK_TIERS.windows(2) {
            assert!(pair[0].min_points < pair[1].min_points);
            assert!(pair[0].rank < pair[1].rank);
        }
    }
}
