//! Transient per-tab badge text.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::debug;

#[derive(Debug, Default)]
struct Slot {
    text: String,
    generation: u64,
}

/// Badge text for each tab. A newer `show` on the same tab cancels the
/// pending clear of the older one.
#[derive(Debug, Clone, Default)]
pub struct Badge {
    slots: Arc<Mutex<HashMap<u32, Slot>>>,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `count` on `tab`, then clear it after `clear_after`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, tab: u32, count: usize, clear_after: Duration) {
        let generation = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let slot = slots.entry(tab).or_default();
            slot.text = count.to_string();
            slot.generation += 1;
            slot.generation
        };
        debug!(tab, count, "badge shown");

        let slots = Arc::clone(&self.slots);
        tokio::spawn(async move {
            tokio::time::sleep(clear_after).await;
            let mut slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get_mut(&tab) {
                if slot.generation == generation {
                    slot.text.clear();
                    debug!(tab, "badge cleared");
                }
            }
        });
    }

    pub fn text(&self, tab: u32) -> String {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tab)
            .map(|s| s.text.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shows_then_clears() {
        let badge = Badge::new();
        badge.show(1, 7, Duration::from_millis(20));
        assert_eq!(badge.text(1), "7");
        assert_eq!(badge.text(2), "");

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(badge.text(1), "");
    }

    #[tokio::test]
    async fn newer_count_survives_older_timer() {
        let badge = Badge::new();
        badge.show(1, 3, Duration::from_millis(20));
        badge.show(1, 4, Duration::from_secs(60));

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(badge.text(1), "4");
    }
}
