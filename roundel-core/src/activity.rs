//! Background activity engine
//!
//! Simulates the two periodic events of the companion device on one
//! fast-polling loop: "item collected" while auto-catch is on and
//! "location visited" while auto-spin is on, both gated on the
//! connection flag.
//!
//! Both events use an elapsed-time-since-last-fire comparison against a
//! monotonic millisecond counter. An exact-multiple check on the tick
//! counter would silently skip a cycle whenever the loop is delayed past
//! the tick boundary; the elapsed-time form fires on the next poll
//! instead. Starvation and drift within one poll interval are
//! acceptable.

/// Activity loop configuration
#[derive(Debug, Clone, Copy)]
pub struct ActivityConfig {
    /// Poll granularity in milliseconds
    pub poll_interval_ms: u32,
    /// Minimum time between item-collected events
    pub catch_interval_ms: u32,
    /// Minimum time between location-visited events
    pub spin_interval_ms: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            catch_interval_ms: 5_000,
            spin_interval_ms: 7_000,
        }
    }
}

/// Events fired by one engine update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityReport {
    /// An item was collected this cycle
    pub caught: bool,
    /// A location was visited this cycle
    pub spun: bool,
}

/// Elapsed-time scheduler for the simulated background events
///
/// Pure logic over caller-supplied timestamps. The fire timestamps only
/// advance on a fire, so a long disconnected stretch is followed by an
/// immediate fire once the gate conditions hold again.
#[derive(Debug, Clone)]
pub struct ActivityEngine {
    config: ActivityConfig,
    last_catch_ms: u32,
    last_spin_ms: u32,
}

impl ActivityEngine {
    /// Create an engine; `now_ms` is the baseline both intervals count from
    pub fn new(config: ActivityConfig, now_ms: u32) -> Self {
        Self {
            config,
            last_catch_ms: now_ms,
            last_spin_ms: now_ms,
        }
    }

    /// Evaluate both events at the current time
    ///
    /// Call once per poll interval. Timestamps may wrap; elapsed time is
    /// computed with wrapping subtraction.
    pub fn update(
        &mut self,
        now_ms: u32,
        connected: bool,
        auto_catch: bool,
        auto_spin: bool,
    ) -> ActivityReport {
        let mut report = ActivityReport::default();

        if connected && auto_catch {
            if now_ms.wrapping_sub(self.last_catch_ms) >= self.config.catch_interval_ms {
                self.last_catch_ms = now_ms;
                report.caught = true;
            }
        }

        if connected && auto_spin {
            if now_ms.wrapping_sub(self.last_spin_ms) >= self.config.spin_interval_ms {
                self.last_spin_ms = now_ms;
                report.spun = true;
            }
        }

        report
    }
}
