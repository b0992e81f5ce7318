use macroquad::prelude::*;
use swarm::simulation::ecosystem::Ecosystem;
use swarm::simulation::params::Params;
use swarm::simulation::verts::AgentVerts;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const N_AGENTS: usize = 400;

fn load_params() -> swarm::simulation::error::Result<Params> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading parameters from {}", path);
            Params::load_from_file(path)
        }
        None => Ok(Params::default()),
    }
}

/// Maps a world coordinate in `[min, max]` to `[0, extent]` pixels.
fn to_screen(v: f32, params: &Params, extent: f32) -> f32 {
    (v - params.world_min) / (params.world_max - params.world_min) * extent
}

fn draw_verts(verts: &AgentVerts, params: &Params) {
    let (w, h) = (screen_width(), screen_height());
    for (pos, col) in verts.quads() {
        draw_circle(
            to_screen(pos[0], params, w),
            // screen y grows downwards
            h - to_screen(pos[1], params, h),
            pos[3].max(0.5),
            Color::new(
                col[0].clamp(0.0, 1.0),
                col[1].clamp(0.0, 1.0),
                col[2].clamp(0.0, 1.0),
                col[3].clamp(0.0, 1.0),
            ),
        );
    }
}

#[macroquad::main("Swarm")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let params = match load_params() {
        Ok(params) => params,
        Err(e) => {
            error!("Failed to load parameters: {}", e);
            return;
        }
    };

    let mut ecosystem = match Ecosystem::new(&params, N_AGENTS, &mut ::rand::rng()) {
        Ok(ecosystem) => ecosystem,
        Err(e) => {
            error!("Failed to create ecosystem: {}", e);
            return;
        }
    };
    let mut verts = AgentVerts::new();

    info!("Starting swarm simulation with {} agents", N_AGENTS);

    loop {
        if let Err(e) = ecosystem.step(&params) {
            error!("Simulation step failed: {}", e);
            break;
        }
        verts.project(&ecosystem.population, &params);

        clear_background(BLACK);
        draw_verts(&verts, &params);
        draw_text(
            &format!(
                "tick {}  living {}  dead {}",
                ecosystem.tick,
                ecosystem.living_count(),
                ecosystem.dead_count()
            ),
            10.0,
            20.0,
            20.0,
            LIGHTGRAY,
        );

        next_frame().await
    }
}
