use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A past monthly winner, shown on the "Previous Winners" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastWinner {
    pub month: String,
    pub name: String,
    pub location: String,
    pub amount: u32,
}

/// Aggregate numbers under the winners list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerStats {
    pub total_awarded: u32,
    pub winners_this_year: u32,
    pub claim_rate_percent: u32,
}

pub static PAST_WINNERS: Lazy<Vec<PastWinner>> = Lazy::new(|| {
    [
        ("February 2024", "Jessica Thompson", "New York, NY", 500),
        ("January 2024", "Robert Martinez", "Miami, FL", 500),
        ("December 2023", "Amanda Chen", "Seattle, WA", 500),
    ]
    .into_iter()
    .map(|(month, name, location, amount)| PastWinner {
        month: month.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        amount,
    })
    .collect()
});

/// Stats cover the whole program history, not just the three listed months.
pub const WINNER_STATS: WinnerStats = WinnerStats {
    total_awarded: 4_500,
    winners_this_year: 9,
    claim_rate_percent: 100,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_table() {
        assert_eq!(PAST_WINNERS.len(), 3);
        assert_eq!(PAST_WINNERS[0].name, "Jessica Thompson");
        assert!(PAST_WINNERS.iter().all(|w| w.amount == 500));
    }

    #[test]
    fn test_stats_cover_listed_winners() {
        let listed: u32 = PAST_WINNERS.iter().map(|w| w.amount).sum();
        assert!(WINNER_STATS.total_awarded >= listed);
        assert!(WINNER_STATS.winners_this_year as usize >= PAST_WINNERS.len());
    }
}
