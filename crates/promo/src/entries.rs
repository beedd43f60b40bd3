use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Names the synthetic feed draws from.
pub const ENTRY_NAMES: [&str; 12] = [
    "Sarah M.", "John D.", "Emma W.", "Mike R.", "Lisa K.", "Tom B.", "Anna P.", "James L.",
    "Maria G.", "David H.", "Sophie R.", "Chris T.",
];

/// How many rows the "recent entries" list keeps.
pub const FEED_CAPACITY: usize = 4;

/// Entry counter shown on first paint, before the simulator adds anything.
pub const INITIAL_TOTAL_ENTRIES: u64 = 8_427;

/// One row of the recent-entries feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub user: String,
    pub amount: u32,
    /// Age in minutes; 0 renders as "Just now".
    pub minutes_ago: u32,
}

impl Entry {
    pub fn age_label(&self) -> String {
        match self.minutes_ago {
            0 => "Just now".to_string(),
            1 => "1 min ago".to_string(),
            n => format!("{} mins ago", n),
        }
    }
}

/// The four rows the page starts with.
pub fn seed() -> Vec<Entry> {
    [
        ("Sarah M.", 25, 2),
        ("John D.", 50, 5),
        ("Emma W.", 10, 12),
        ("Mike R.", 100, 15),
    ]
    .into_iter()
    .map(|(user, amount, minutes_ago)| Entry {
        id: Uuid::new_v4(),
        user: user.to_string(),
        amount,
        minutes_ago,
    })
    .collect()
}

/// Builds a fresh entry from two uniform rolls in `[0, 1)`.
///
/// The rolls are injected by the caller (the frontend passes
/// `js_sys::Math::random()`), which keeps this a total function: any inputs,
/// including exactly 0.0 and values just under 1.0, map to a valid entry with
/// an amount in `10..=99`.
pub fn synthesize(roll_name: f64, roll_amount: f64) -> Entry {
    let name_idx = ((roll_name * ENTRY_NAMES.len() as f64) as usize).min(ENTRY_NAMES.len() - 1);
    let amount = 10 + ((roll_amount * 90.0) as u32).min(89);
    Entry {
        id: Uuid::new_v4(),
        user: ENTRY_NAMES[name_idx].to_string(),
        amount,
        minutes_ago: 0,
    }
}

/// Advances a row's displayed age one step along the ladder the seeded rows
/// use (just now → 2 → 5 → 12 → 15 mins). Ages past the ladder stay put, the
/// row falls off the capped list before that matters.
pub fn age_step(minutes_ago: u32) -> u32 {
    match minutes_ago {
        0 => 2,
        2 => 5,
        5 => 12,
        _ => 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let rows = seed();
        assert_eq!(rows.len(), FEED_CAPACITY);
        assert_eq!(rows[0].user, "Sarah M.");
        assert_eq!(rows[0].minutes_ago, 2);
        assert_eq!(rows[3].amount, 100);
    }

    #[test]
    fn test_synthesize_bounds() {
        let low = synthesize(0.0, 0.0);
        assert_eq!(low.user, ENTRY_NAMES[0]);
        assert_eq!(low.amount, 10);
        assert_eq!(low.minutes_ago, 0);

        let high = synthesize(0.999_999, 0.999_999);
        assert_eq!(high.user, ENTRY_NAMES[ENTRY_NAMES.len() - 1]);
        assert_eq!(high.amount, 99);
    }

    #[test]
    fn test_synthesize_out_of_range_rolls_stay_valid() {
        // Math.random never returns 1.0, but the function must not index
        // out of bounds even if a caller passes it.
        let e = synthesize(1.0, 1.0);
        assert_eq!(e.user, ENTRY_NAMES[ENTRY_NAMES.len() - 1]);
        assert_eq!(e.amount, 99);
    }

    #[test]
    fn test_age_label() {
        let mut e = synthesize(0.0, 0.0);
        assert_eq!(e.age_label(), "Just now");
        e.minutes_ago = 1;
        assert_eq!(e.age_label(), "1 min ago");
        e.minutes_ago = 12;
        assert_eq!(e.age_label(), "12 mins ago");
    }

    #[test]
    fn test_age_ladder() {
        assert_eq!(age_step(0), 2);
        assert_eq!(age_step(2), 5);
        assert_eq!(age_step(5), 12);
        assert_eq!(age_step(12), 15);
        assert_eq!(age_step(15), 15);
    }
}
