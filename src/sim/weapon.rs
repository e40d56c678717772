//! Ammo and reload state machine
//!
//! ```text
//! READY(ammo>0)  --fire--> READY(ammo-1)
//! READY(ammo==0) --fire--> RELOADING(reload_ticks)
//! RELOADING      --tick--> RELOADING(timer-1)
//! RELOADING(0)           -> READY(capacity)
//! ```
//!
//! Firing while reloading does nothing. There is no partial reload and no way
//! to cancel one. A weapon with no capacity never fires or reloads.

use serde::{Deserialize, Serialize};

/// What a fire request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A round was spent; the caller spawns the projectile
    Fired,
    /// Magazine was empty, reload timer started
    ReloadStarted,
    /// Reload in progress, request dropped
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub ammo: u32,
    pub capacity: u32,
    /// Ticks until the magazine refills (0 = not reloading)
    pub reload_ticks_remaining: u32,
    /// Duration of a full reload
    pub reload_ticks: u32,
}

impl Weapon {
    /// A full magazine
    pub fn new(capacity: u32, reload_ticks: u32) -> Self {
        Self {
            ammo: capacity,
            capacity,
            reload_ticks_remaining: 0,
            reload_ticks,
        }
    }

    #[inline]
    pub fn is_reloading(&self) -> bool {
        self.reload_ticks_remaining > 0
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.ammo > 0 && !self.is_reloading()
    }

    /// Handle a fire request
    pub fn try_fire(&mut self) -> FireOutcome {
        if self.capacity == 0 || self.is_reloading() {
            return FireOutcome::Ignored;
        }
        if self.ammo > 0 {
            self.ammo -= 1;
            return FireOutcome::Fired;
        }
        if self.reload_ticks == 0 {
            // Instant reload: refill and take the shot
            self.ammo = self.capacity.saturating_sub(1);
            return FireOutcome::Fired;
        }
        self.reload_ticks_remaining = self.reload_ticks;
        FireOutcome::ReloadStarted
    }

    /// Advance the reload timer by one tick. Returns true when the magazine
    /// was refilled on this tick.
    pub fn tick(&mut self) -> bool {
        if self.reload_ticks_remaining == 0 {
            return false;
        }
        self.reload_ticks_remaining -= 1;
        if self.reload_ticks_remaining == 0 {
            self.ammo = self.capacity;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_magazine_starts_reload() {
        let mut weapon = Weapon::new(10, 60);
        for _ in 0..10 {
            assert_eq!(weapon.try_fire(), FireOutcome::Fired);
        }
        assert_eq!(weapon.ammo, 0);
        assert!(!weapon.is_reloading());

        assert_eq!(weapon.try_fire(), FireOutcome::ReloadStarted);
        assert_eq!(weapon.reload_ticks_remaining, 60);

        for i in 0..59 {
            assert!(!weapon.tick(), "refilled early on tick {i}");
            assert_eq!(weapon.ammo, 0);
        }
        assert!(weapon.tick());
        assert_eq!(weapon.ammo, 10);
        assert!(!weapon.is_reloading());

        assert_eq!(weapon.try_fire(), FireOutcome::Fired);
        assert_eq!(weapon.ammo, 9);
    }

    #[test]
    fn test_fire_while_reloading_is_ignored() {
        let mut weapon = Weapon::new(1, 5);
        weapon.try_fire();
        weapon.try_fire();
        weapon.tick();
        let before = weapon.clone();

        assert_eq!(weapon.try_fire(), FireOutcome::Ignored);
        assert_eq!(weapon, before);

        weapon.tick();
        assert_eq!(weapon.reload_ticks_remaining, before.reload_ticks_remaining - 1);
        assert_eq!(weapon.ammo, 0);
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut weapon = Weapon::new(10, 60);
        weapon.try_fire();
        assert!(!weapon.tick());
        assert_eq!(weapon.ammo, 9);
        assert_eq!(weapon.reload_ticks_remaining, 0);
    }

    #[test]
    fn test_zero_reload_refills_on_fire() {
        let mut weapon = Weapon::new(2, 0);
        weapon.try_fire();
        weapon.try_fire();
        assert_eq!(weapon.try_fire(), FireOutcome::Fired);
        assert_eq!(weapon.ammo, 1);
    }

    #[test]
    fn test_zero_capacity_never_fires() {
        for reload_ticks in [0, 60] {
            let mut weapon = Weapon::new(0, reload_ticks);
            for _ in 0..3 {
                assert_eq!(weapon.try_fire(), FireOutcome::Ignored);
                assert!(!weapon.tick());
            }
            assert_eq!(weapon, Weapon::new(0, reload_ticks));
            assert!(!weapon.can_fire());
        }
    }
}
