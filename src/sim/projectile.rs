//! Straight-line projectiles that stop on the first wall

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::is_walkable;
use super::map::GridMap;
use super::state::Pose;
use crate::heading_vector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Fixed at spawn
    pub heading: f32,
    /// Travel per tick
    pub speed: f32,
    /// Cleared permanently on wall impact
    pub active: bool,
}

impl Projectile {
    /// Launch from a viewpoint along its heading
    pub fn spawn(origin: &Pose, speed: f32) -> Self {
        Self {
            pos: origin.pos,
            heading: origin.heading,
            speed,
            active: true,
        }
    }

    /// Move one tick. A blocked step deactivates the projectile and leaves it
    /// where it was. Inactive projectiles never move again.
    ///
    /// Returns true if this call stopped the projectile.
    pub fn advance(&mut self, map: &GridMap) -> bool {
        if !self.active {
            return false;
        }

        let next = self.pos + heading_vector(self.heading) * self.speed;
        if is_walkable(map, next) {
            self.pos = next;
            false
        } else {
            self.active = false;
            true
        }
    }
}
