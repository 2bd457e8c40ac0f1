//! Fixed-window cooldown tracking.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default cooldown window: one permitted action per ten minutes.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(600);

/// A fixed-window cooldown gate keyed by caller-chosen keys.
///
/// The first time a key is seen, or once its window has elapsed, `allow`
/// returns `true` and records the moment. Until the window elapses again the
/// key is denied. Denied calls do not extend the window.
///
/// # Examples
///
/// ```
/// use rolecall_rate_limit::CooldownGate;
/// use std::time::Duration;
///
/// let mut gate = CooldownGate::new(Duration::from_secs(600));
/// assert!(gate.allow(("message", "user")));
/// assert!(!gate.allow(("message", "user")));
/// assert!(gate.allow(("message", "other-user")));
/// ```
#[derive(Debug)]
pub struct CooldownGate<K> {
    window: Duration,
    last_allowed: HashMap<K, Instant>,
}

impl<K> CooldownGate<K>
where
    K: Eq + Hash + Clone,
{
    /// Create a gate with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_allowed: HashMap::new(),
        }
    }

    /// The configured window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check a key against the gate, recording the current time when allowed.
    pub fn allow(&mut self, key: K) -> bool {
        let now = Instant::now();
        match self.last_allowed.get(&key) {
            Some(last) if now.duration_since(*last) < self.window => {
                debug!("cooldown active, action denied");
                false
            }
            _ => {
                self.last_allowed.insert(key, now);
                true
            }
        }
    }

    /// Time remaining until the key is allowed again, if it is on cooldown.
    pub fn remaining(&self, key: &K) -> Option<Duration> {
        let last = self.last_allowed.get(key)?;
        self.window.checked_sub(last.elapsed())
    }

    /// Drop expired records. Optional housekeeping; correctness does not
    /// depend on it.
    pub fn prune(&mut self) {
        let window = self.window;
        self.last_allowed
            .retain(|_, last| last.elapsed() < window);
    }
}

impl<K> Default for CooldownGate<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
