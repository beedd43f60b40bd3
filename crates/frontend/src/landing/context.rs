use leptos::prelude::*;
use promo::countdown::CountdownTime;
use promo::entries::{self, Entry, FEED_CAPACITY, INITIAL_TOTAL_ENTRIES};

/// Live page state shared by the stats bar, the feed section and the
/// notification toast. `Copy` struct of signals, provided once at the app
/// root and reached through context from any depth.
#[derive(Clone, Copy)]
pub struct LandingContext {
    /// Running entry counter, seeded before the simulator starts.
    pub total_entries: RwSignal<u64>,
    /// Recent entries, newest first, capped at [`FEED_CAPACITY`].
    pub recent_entries: RwSignal<Vec<Entry>>,
    /// Toast flag raised by the feed simulator.
    pub notification_visible: RwSignal<bool>,
    /// Time left until the drawing.
    pub countdown: RwSignal<CountdownTime>,
}

impl LandingContext {
    pub fn new(countdown: CountdownTime) -> Self {
        Self {
            total_entries: RwSignal::new(INITIAL_TOTAL_ENTRIES),
            recent_entries: RwSignal::new(entries::seed()),
            notification_visible: RwSignal::new(false),
            countdown: RwSignal::new(countdown),
        }
    }

    /// Registers one synthetic entry: ages the rows already on screen,
    /// prepends the new one, drops whatever falls past the cap, and bumps
    /// the counter.
    pub fn record_entry(&self, entry: Entry) {
        self.recent_entries.update(|rows| {
            for row in rows.iter_mut() {
                row.minutes_ago = entries::age_step(row.minutes_ago);
            }
            rows.insert(0, entry);
            rows.truncate(FEED_CAPACITY);
        });
        self.total_entries.update(|n| *n += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_reactive_scope<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    fn test_ctx() -> LandingContext {
        LandingContext::new(CountdownTime::new(3, 14, 22, 0))
    }

    #[test]
    fn test_initial_state() {
        in_reactive_scope(|| {
            let ctx = test_ctx();
            assert_eq!(ctx.total_entries.get_untracked(), INITIAL_TOTAL_ENTRIES);
            assert_eq!(ctx.recent_entries.get_untracked().len(), FEED_CAPACITY);
            assert!(!ctx.notification_visible.get_untracked());
        });
    }

    #[test]
    fn test_record_entry_prepends_and_counts() {
        in_reactive_scope(|| {
            let ctx = test_ctx();
            let entry = entries::synthesize(0.5, 0.5);
            let id = entry.id;
            ctx.record_entry(entry);

            let rows = ctx.recent_entries.get_untracked();
            assert_eq!(rows[0].id, id);
            assert_eq!(rows[0].minutes_ago, 0);
            assert_eq!(
                ctx.total_entries.get_untracked(),
                INITIAL_TOTAL_ENTRIES + 1
            );
        });
    }

    #[test]
    fn test_feed_stays_capped() {
        in_reactive_scope(|| {
            let ctx = test_ctx();
            for _ in 0..10 {
                ctx.record_entry(entries::synthesize(0.1, 0.9));
            }
            assert_eq!(ctx.recent_entries.get_untracked().len(), FEED_CAPACITY);
            assert_eq!(
                ctx.total_entries.get_untracked(),
                INITIAL_TOTAL_ENTRIES + 10
            );
        });
    }

    #[test]
    fn test_record_entry_ages_existing_rows() {
        in_reactive_scope(|| {
            let ctx = test_ctx();
            ctx.record_entry(entries::synthesize(0.0, 0.0));
            let rows = ctx.recent_entries.get_untracked();
            // seeded 2/5/12 advanced one step, the 15-minute row fell off
            let ages: Vec<u32> = rows.iter().map(|r| r.minutes_ago).collect();
            assert_eq!(ages, vec![0, 5, 12, 15]);
        });
    }
}
