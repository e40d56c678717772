//! Fixed-rate simulation tick
//!
//! One call per rendered frame. Order within a tick: fire input, movement
//! and collision, reload timer, projectile advancement. Ray casting and
//! drawing read the result afterwards (see `renderer::render_frame`); they
//! do not depend on projectiles, so drawing after the advance matches a
//! loop that casts rays between the two.

use super::collision::is_walkable;
use super::state::{GameEvent, GameState};
use crate::{heading_vector, normalize_angle};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_forward: bool,
    pub move_backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Fire was pressed this tick (edge, not held)
    pub fire: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if input.fire {
        state.fire();
    }

    move_player(state, input);

    if state.weapon.tick() {
        log::debug!("Reload complete, ammo {}", state.weapon.ammo);
        state.events.push(GameEvent::ReloadFinished);
    }

    for projectile in &mut state.projectiles {
        if projectile.advance(&state.map) {
            log::debug!(
                "Projectile hit a wall and stopped at ({}, {})",
                projectile.pos.x,
                projectile.pos.y
            );
            state.events.push(GameEvent::ProjectileStopped {
                pos: projectile.pos,
            });
        }
    }
}

/// Walk along the heading held at the start of the tick, then turn.
/// The step is all-or-nothing: a blocked target leaves the position alone.
fn move_player(state: &mut GameState, input: &TickInput) {
    let pose = &mut state.player.pose;
    let forward = heading_vector(pose.heading) * state.tuning.player_speed;

    let mut target = pose.pos;
    if input.move_forward {
        target += forward;
    }
    if input.move_backward {
        target -= forward;
    }

    if input.rotate_left {
        pose.heading -= state.tuning.rotation_speed;
    }
    if input.rotate_right {
        pose.heading += state.tuning.rotation_speed;
    }
    pose.heading = normalize_angle(pose.heading);

    if target == pose.pos {
        return;
    }
    if is_walkable(&state.map, target) {
        pose.pos = target;
        log::trace!("Player moved to ({}, {})", pose.pos.x, pose.pos.y);
    } else {
        log::debug!("Movement blocked at ({}, {})", target.x, target.y);
        state.events.push(GameEvent::MoveBlocked);
    }
}
