//! Column projection
//!
//! Each ray owns one vertical slice of the screen. A hit at distance `d`
//! becomes a wall strip of height `min(h, h / (d * k + 1))`, centred
//! vertically; a miss leaves the background showing.

use glam::Vec2;

use super::canvas::{Canvas, Rect};
use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::projectile::Projectile;
use crate::sim::raycast::{RayHit, cast_rays};
use crate::sim::state::GameState;

/// Projected wall height for a hit distance
#[inline]
pub fn wall_height(distance: f32, screen_height: f32, falloff: f32) -> f32 {
    (screen_height / (distance * falloff + 1.0)).min(screen_height)
}

/// Screen rectangle for one ray, `None` when the ray hit nothing
pub fn wall_slice(hit: &RayHit, settings: &Settings) -> Option<Rect> {
    let distance = hit.distance?;
    let screen_height = settings.screen_height as f32;
    let column_width = settings.column_width() as f32;

    let height = wall_height(distance, screen_height, settings.wall_falloff);
    Some(Rect::new(
        hit.column as f32 * column_width,
        ((screen_height - height) / 2.0).floor(),
        column_width,
        height,
    ))
}

/// Draw one strip per ray that hit a wall
pub fn draw_columns<C: Canvas + ?Sized>(canvas: &mut C, hits: &[RayHit], settings: &Settings) {
    for slice in hits.iter().filter_map(|hit| wall_slice(hit, settings)) {
        canvas.draw_rect(slice, colors::WALL);
    }
}

/// Draw active projectiles as dots at their world position (overlay view)
pub fn draw_projectiles<'a, C, I>(canvas: &mut C, projectiles: I, radius: f32)
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = &'a Projectile>,
{
    for projectile in projectiles.into_iter().filter(|p| p.active) {
        canvas.draw_circle(
            Vec2::new(projectile.pos.x.trunc(), projectile.pos.y.trunc()),
            radius,
            colors::PROJECTILE,
        );
    }
}

/// Draw a full frame: background, walls from the player's viewpoint, then
/// projectiles. Returns the ray results for the host to inspect.
pub fn render_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    settings: &Settings,
) -> Vec<RayHit> {
    canvas.clear(colors::BACKGROUND);

    let hits = cast_rays(&state.map, &state.player.pose, &settings.ray_config());
    draw_columns(canvas, &hits, settings);
    draw_projectiles(canvas, &state.projectiles, state.tuning.projectile_radius);

    hits
}
