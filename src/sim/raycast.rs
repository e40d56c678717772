//! Ray casting through the tile grid
//!
//! Each frame casts a fan of `num_rays` rays across the field of view and
//! reports, per ray, the distance to the first blocking tile. Anything the
//! collision test rejects stops a ray, including the space outside the grid.
//! Earlier versions of this game skipped out-of-grid samples and kept
//! marching, so open map edges drew background; here they draw as walls.
//! Enclosed maps render the same either way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{is_walkable, world_to_tile};
use super::map::GridMap;
use super::state::Pose;
use crate::heading_vector;

/// Wall search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RayMethod {
    /// March in unit steps, sampling the grid at each step
    #[default]
    #[serde(alias = "fixed_step", alias = "fixed")]
    FixedStep,
    /// Walk grid-line crossings (exact first-wall distance)
    Dda,
}

impl RayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RayMethod::FixedStep => "fixed-step",
            RayMethod::Dda => "dda",
        }
    }
}

/// Parameters for one fan of rays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayConfig {
    pub fov: f32,
    pub num_rays: u32,
    pub max_depth: u32,
    pub method: RayMethod,
}

impl Default for RayConfig {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            fov: FOV,
            num_rays: NUM_RAYS,
            max_depth: MAX_DEPTH,
            method: RayMethod::FixedStep,
        }
    }
}

/// Result for one ray (not kept across frames)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Screen column slot, left to right
    pub column: u32,
    /// Distance to the first wall, `None` if nothing within `max_depth`
    pub distance: Option<f32>,
}

impl RayHit {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance.is_some()
    }
}

/// Angle of ray `index` within the fan
#[inline]
pub fn ray_angle(heading: f32, fov: f32, num_rays: u32, index: u32) -> f32 {
    heading - fov / 2.0 + (fov / num_rays as f32) * index as f32
}

/// Fixed-step march: the first whole depth in `1..max_depth` whose sample is blocked
pub fn cast_ray(map: &GridMap, origin: Vec2, angle: f32, max_depth: u32) -> Option<f32> {
    let dir = heading_vector(angle);
    (1..max_depth)
        .find(|&depth| !is_walkable(map, origin + dir * depth as f32))
        .map(|depth| depth as f32)
}

/// Grid-line walk returning the distance at which the ray enters the first
/// blocked tile.
///
/// Never farther than [`cast_ray`]. The two agree to within one unit except
/// where the march steps over a wall corner thinner than one unit, in which
/// case this reports the corner and the march reports whatever lies behind
/// it. Uses the same `max_depth - 1` reach.
pub fn cast_ray_dda(map: &GridMap, origin: Vec2, angle: f32, max_depth: u32) -> Option<f32> {
    let reach = max_depth.saturating_sub(1) as f32;
    if reach < 1.0 {
        return None;
    }
    if !is_walkable(map, origin) {
        // Already inside a wall; the march would stop at its first sample
        return Some(1.0);
    }

    let tile_size = map.tile_size();
    let dir = heading_vector(angle);
    let mut tile = world_to_tile(origin, tile_size);

    let step_col: i64 = if dir.x > 0.0 { 1 } else { -1 };
    let step_row: i64 = if dir.y > 0.0 { 1 } else { -1 };

    // Distance along the ray between successive vertical / horizontal grid lines
    let delta_x = if dir.x != 0.0 {
        tile_size / dir.x.abs()
    } else {
        f32::INFINITY
    };
    let delta_y = if dir.y != 0.0 {
        tile_size / dir.y.abs()
    } else {
        f32::INFINITY
    };

    // Distance to the first vertical / horizontal grid line
    let mut next_x = if dir.x > 0.0 {
        ((tile.col + 1) as f32 * tile_size - origin.x) / dir.x
    } else if dir.x < 0.0 {
        (tile.col as f32 * tile_size - origin.x) / dir.x
    } else {
        f32::INFINITY
    };
    let mut next_y = if dir.y > 0.0 {
        ((tile.row + 1) as f32 * tile_size - origin.y) / dir.y
    } else if dir.y < 0.0 {
        (tile.row as f32 * tile_size - origin.y) / dir.y
    } else {
        f32::INFINITY
    };

    loop {
        let t = if next_x < next_y {
            tile.col += step_col;
            let t = next_x;
            next_x += delta_x;
            t
        } else {
            tile.row += step_row;
            let t = next_y;
            next_y += delta_y;
            t
        };

        if t > reach {
            return None;
        }
        if !map.tile(tile).is_some_and(|t| t.is_open()) {
            return Some(t.max(1.0));
        }
    }
}

/// Cast the full fan for a viewpoint, left to right
pub fn cast_rays(map: &GridMap, pose: &Pose, config: &RayConfig) -> Vec<RayHit> {
    let cast = match config.method {
        RayMethod::FixedStep => cast_ray,
        RayMethod::Dda => cast_ray_dda,
    };

    (0..config.num_rays)
        .map(|column| {
            let angle = ray_angle(pose.heading, config.fov, config.num_rays, column);
            RayHit {
                column,
                distance: cast(map, pose.pos, angle, config.max_depth),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::levels::LEVELS;
    use crate::sim::map::{Tile, TileCoord};
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    /// 8 x 6 tiles, open interior spanning x 50..350, y 50..250
    fn empty_room() -> GridMap {
        GridMap::parse(
            &[
                "########",
                "#......#",
                "#......#",
                "#......#",
                "#......#",
                "########",
            ],
            50.0,
        )
        .unwrap()
    }

    #[test]
    fn test_perpendicular_ray_distance() {
        let map = empty_room();
        let origin = Vec2::new(100.0, 125.0);

        // East wall starts at x = 350
        assert_eq!(cast_ray(&map, origin, 0.0, 800), Some(250.0));
        // West wall ends at x = 50 (tile 0 spans 0..50), sample at x = 50 is still open
        let west = cast_ray(&map, origin, PI, 800).unwrap();
        assert!((west - 50.0).abs() <= 1.0, "west = {west}");
        // South wall starts at y = 250
        let south = cast_ray(&map, origin, FRAC_PI_2, 800).unwrap();
        assert!((south - 125.0).abs() <= 1.0, "south = {south}");
    }

    #[test]
    fn test_dda_matches_perpendicular_distance() {
        let map = empty_room();
        let origin = Vec2::new(100.0, 125.0);
        let east = cast_ray_dda(&map, origin, 0.0, 800).unwrap();
        assert!((east - 250.0).abs() < 1e-3);
        let west = cast_ray_dda(&map, origin, PI, 800).unwrap();
        assert!((west - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_depth_limit_reports_no_hit() {
        let map = empty_room();
        let origin = Vec2::new(100.0, 125.0);
        assert_eq!(cast_ray(&map, origin, 0.0, 200), None);
        assert_eq!(cast_ray_dda(&map, origin, 0.0, 200), None);
        // Reach is max_depth - 1, so 251 is just enough
        assert_eq!(cast_ray(&map, origin, 0.0, 251), Some(250.0));
    }

    #[test]
    fn test_origin_in_wall_hits_immediately() {
        let map = empty_room();
        let origin = Vec2::new(25.0, 25.0);
        assert_eq!(cast_ray(&map, origin, 0.0, 800), Some(1.0));
        assert_eq!(cast_ray_dda(&map, origin, 0.0, 800), Some(1.0));
    }

    #[test]
    fn test_fan_angles_span_fov() {
        let fov = PI / 3.0;
        assert!((ray_angle(0.0, fov, 120, 0) + fov / 2.0).abs() < 1e-6);
        assert!((ray_angle(0.0, fov, 120, 60)).abs() < 1e-6);
        assert!((ray_angle(1.0, fov, 120, 119) - (1.0 + fov / 2.0 - fov / 120.0)).abs() < 1e-6);
    }

    #[test]
    fn test_cast_rays_deterministic_and_bounded() {
        let map = GridMap::parse(LEVELS[0].rows, 50.0).unwrap();
        let pose = Pose::new(Vec2::new(75.0, 75.0), 0.3);
        let config = RayConfig::default();

        let first = cast_rays(&map, &pose, &config);
        let second = cast_rays(&map, &pose, &config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 120);

        for (i, hit) in first.iter().enumerate() {
            assert_eq!(hit.column, i as u32);
            let d = hit.distance.expect("enclosed map always hits");
            assert!((1.0..=800.0).contains(&d));
        }
    }

    #[test]
    fn test_centre_ray_matches_single_cast() {
        let map = empty_room();
        let pose = Pose::new(Vec2::new(100.0, 125.0), 0.0);
        let hits = cast_rays(&map, &pose, &RayConfig::default());
        let centre = hits[60].distance.unwrap();
        assert!((centre - 250.0).abs() <= 1.0);
    }

    #[test]
    fn test_open_edged_map_still_stops_at_boundary() {
        // No wall ring; leaving the grid counts as a hit
        let map = GridMap::parse(&["....", "...."], 50.0).unwrap();
        let hit = cast_ray(&map, Vec2::new(25.0, 25.0), 0.0, 800).unwrap();
        assert_eq!(hit, 175.0);
    }

    #[test]
    fn test_dda_never_farther_than_march_on_level() {
        let map = GridMap::parse(LEVELS[0].rows, 50.0).unwrap();
        let mut origins = Vec::new();
        for row in 0..map.rows() as i64 {
            for col in 0..map.cols() as i64 {
                if map.tile(TileCoord { col, row }) != Some(Tile::Open) {
                    continue;
                }
                for (fx, fy) in [(0.2, 0.3), (0.5, 0.5), (0.8, 0.6)] {
                    origins.push(Vec2::new(
                        (col as f32 + fx) * 50.0,
                        (row as f32 + fy) * 50.0,
                    ));
                }
            }
        }
        assert!(!origins.is_empty());

        for origin in origins {
            for i in 0..72 {
                let angle = i as f32 * (2.0 * PI / 72.0) + 0.01;
                let march = cast_ray(&map, origin, angle, 800).unwrap();
                let dda = cast_ray_dda(&map, origin, angle, 800).unwrap();
                assert!(
                    march >= dda - 1e-3,
                    "origin {origin} angle {angle}: march {march} dda {dda}"
                );
            }
        }
    }

    #[test]
    fn test_march_can_step_over_thin_corner() {
        let map = GridMap::parse(LEVELS[0].rows, 50.0).unwrap();
        let origin = Vec2::new(51.6, 124.6);
        let angle = 5.814;
        let march = cast_ray(&map, origin, angle, 800).unwrap();
        let dda = cast_ray_dda(&map, origin, angle, 800).unwrap();
        assert!(march - dda > 1.0, "march {march} dda {dda}");
    }

    proptest! {
        #[test]
        fn prop_dda_agrees_with_march_in_convex_room(
            x in 51.0f32..349.0,
            y in 51.0f32..249.0,
            angle in -PI..PI,
        ) {
            let map = empty_room();
            let origin = Vec2::new(x, y);
            let march = cast_ray(&map, origin, angle, 800).unwrap();
            let dda = cast_ray_dda(&map, origin, angle, 800).unwrap();
            prop_assert!(march >= dda - 1e-2, "march {} dda {}", march, dda);
            prop_assert!(march - dda <= 1.0 + 1e-2, "march {} dda {}", march, dda);
        }

        #[test]
        fn prop_fan_length_and_range(
            x in 51.0f32..349.0,
            y in 51.0f32..249.0,
            heading in -PI..PI,
            dda in any::<bool>(),
        ) {
            let map = empty_room();
            let config = RayConfig {
                method: if dda { RayMethod::Dda } else { RayMethod::FixedStep },
                ..Default::default()
            };
            let hits = cast_rays(&map, &Pose::new(Vec2::new(x, y), heading), &config);
            prop_assert_eq!(hits.len(), config.num_rays as usize);
            for hit in hits {
                let d = hit.distance.unwrap();
                prop_assert!(d >= 1.0 && d <= config.max_depth as f32);
            }
        }
    }
}
