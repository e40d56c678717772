//! Tilecast entry point
//!
//! Window creation, input polling and presentation belong to the host. On
//! native this runs a scripted session against the vertex canvas and logs
//! what the simulation did, which is handy for checking a config file.
//!
//! Usage: `tilecast [config.json]` or `tilecast --print-config`

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

/// Length of the scripted session (ticks)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u64 = 240;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    use std::path::PathBuf;

    use tilecast::Config;
    use tilecast::renderer::{VertexCanvas, render_frame};
    use tilecast::sim::{GameEvent, GameState, load_level, tick};

    env_logger::init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--print-config") {
        return match Config::default().to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let path = arg.map(PathBuf::from);
    let config = match Config::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let map = match load_level(config.level, config.tuning.tile_size) {
        Ok(map) => map,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Tilecast (native) starting: {} rays, {} method",
        config.settings.num_rays,
        config.settings.ray_method.as_str()
    );

    let mut state = GameState::new(map, config.tuning.clone());
    let mut canvas = VertexCanvas::new();
    let mut shots = 0u32;
    let mut impacts = 0u32;
    let mut blocked = 0u32;

    for frame in 0..DEMO_TICKS {
        tick(&mut state, &scripted_input(frame));
        let hits = render_frame(&mut canvas, &state, &config.settings);

        for event in &state.events {
            match event {
                GameEvent::Fired { .. } => shots += 1,
                GameEvent::ProjectileStopped { .. } => impacts += 1,
                GameEvent::MoveBlocked => blocked += 1,
                GameEvent::ReloadStarted | GameEvent::ReloadFinished => {}
            }
        }

        if frame % 60 == 0 {
            let hud = state.hud();
            let walls = hits.iter().filter(|h| h.is_hit()).count();
            log::info!(
                "tick {}: pos ({:.1}, {:.1}) heading {:.2}, {} wall columns, {} triangles, ammo {}{}",
                state.time_ticks,
                state.player.pose.pos.x,
                state.player.pose.pos.y,
                state.player.pose.heading,
                walls,
                canvas.triangle_count(),
                hud.ammo,
                if hud.reloading { " (reloading)" } else { "" }
            );
        }
    }

    let pruned = state.prune_projectiles();
    log::info!(
        "Session done: {} shots, {} wall impacts, {} blocked moves, {} spent projectiles pruned",
        shots,
        impacts,
        blocked,
        pruned
    );

    ExitCode::SUCCESS
}

/// Walk, turn, and fire in a fixed pattern
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(frame: u64) -> tilecast::sim::TickInput {
    tilecast::sim::TickInput {
        move_forward: frame % 80 < 50,
        move_backward: false,
        rotate_left: false,
        rotate_right: frame % 80 >= 50,
        fire: frame % 7 == 0,
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
