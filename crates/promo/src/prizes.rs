use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One prize tier of the sweepstakes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    pub tier: String,
    /// Prize in whole dollars.
    pub amount: u32,
    /// Stated odds, display-only ("1:10000").
    pub odds: String,
}

/// The fixed tier table, best prize first.
pub static PRIZE_TIERS: Lazy<Vec<PrizeTier>> = Lazy::new(|| {
    [
        ("Grand Prize", 500, "1:10000"),
        ("Second Prize", 100, "1:5000"),
        ("Third Prize", 50, "1:1000"),
    ]
    .into_iter()
    .map(|(tier, amount, odds)| PrizeTier {
        tier: tier.to_string(),
        amount,
        odds: odds.to_string(),
    })
    .collect()
});

/// Headline prize shown in the hero section.
pub fn grand_prize_amount() -> u32 {
    PRIZE_TIERS.first().map(|t| t.amount).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_table() {
        assert_eq!(PRIZE_TIERS.len(), 3);
        assert_eq!(PRIZE_TIERS[0].tier, "Grand Prize");
        assert_eq!(grand_prize_amount(), 500);
    }

    #[test]
    fn test_tiers_sorted_best_first() {
        let amounts: Vec<u32> = PRIZE_TIERS.iter().map(|t| t.amount).collect();
        let mut sorted = amounts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(amounts, sorted);
    }
}
