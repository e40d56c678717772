//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there are no
//! process-wide globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::map::GridMap;
use super::projectile::Projectile;
use super::weapon::{FireOutcome, Weapon};
use crate::tuning::Tuning;

/// A viewpoint: world position plus heading (radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub pos: Vec2,
    pub heading: f32,
}

impl Pose {
    pub const fn new(pos: Vec2, heading: f32) -> Self {
        Self { pos, heading }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pose: Pose,
    pub health: u32,
}

/// Something the host may want to react to (sound, HUD flash)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { pos: Vec2, heading: f32 },
    ReloadStarted,
    ReloadFinished,
    /// A projectile hit a wall; `pos` is where it stopped
    ProjectileStopped { pos: Vec2 },
    /// The player's step was rejected by the collision test
    MoveBlocked,
}

/// Numbers the external HUD draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStatus {
    pub health: u32,
    pub ammo: u32,
    pub reloading: bool,
    pub reload_ticks_remaining: u32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Level grid, read-only for the life of the level
    pub map: GridMap,
    pub tuning: Tuning,
    pub player: Player,
    pub weapon: Weapon,
    /// Spawn order; inactive entries stay until pruned
    pub projectiles: Vec<Projectile>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised during the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a level with the player at the centre of the first open tile,
    /// facing +x
    pub fn new(map: GridMap, tuning: Tuning) -> Self {
        let spawn = map.first_open_center().unwrap_or(Vec2::ZERO);
        log::info!("Player spawned at ({}, {})", spawn.x, spawn.y);
        Self::with_pose(map, tuning, Pose::new(spawn, 0.0))
    }

    pub fn with_pose(map: GridMap, tuning: Tuning, pose: Pose) -> Self {
        Self {
            player: Player {
                pose,
                health: tuning.player_health,
            },
            weapon: Weapon::new(tuning.ammo_capacity, tuning.reload_ticks),
            map,
            tuning,
            projectiles: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Pull the trigger. Spawns a projectile from the player's pose when a
    /// round is available.
    pub fn fire(&mut self) -> FireOutcome {
        let outcome = self.weapon.try_fire();
        match outcome {
            FireOutcome::Fired => {
                let pose = self.player.pose;
                self.projectiles
                    .push(Projectile::spawn(&pose, self.tuning.projectile_speed));
                log::debug!(
                    "Projectile fired from ({}, {}) at angle {}",
                    pose.pos.x,
                    pose.pos.y,
                    pose.heading
                );
                self.events.push(GameEvent::Fired {
                    pos: pose.pos,
                    heading: pose.heading,
                });
            }
            FireOutcome::ReloadStarted => {
                log::debug!("Out of ammo, reloading for {} ticks", self.weapon.reload_ticks);
                self.events.push(GameEvent::ReloadStarted);
            }
            FireOutcome::Ignored => {}
        }
        outcome
    }

    /// Projectiles still in flight
    pub fn active_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| p.active)
    }

    /// Drop spent projectiles. Never called by `tick`; long-running hosts
    /// may call it to bound memory.
    pub fn prune_projectiles(&mut self) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain(|p| p.active);
        before - self.projectiles.len()
    }

    pub fn hud(&self) -> HudStatus {
        HudStatus {
            health: self.player.health,
            ammo: self.weapon.ammo,
            reloading: self.weapon.is_reloading(),
            reload_ticks_remaining: self.weapon.reload_ticks_remaining,
        }
    }
}
