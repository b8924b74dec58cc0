//! Headless effects replay.
//!
//! Plays a short scripted skirmish through a [`ParticleSystem`] and writes
//! the final frame to a PNG.
//!
//! Usage: `sparkfield [ticks] [output.png]`. Set `SPARKFIELD_CONFIG` to a
//! JSON config path to override the system defaults.

use sparkfield::prelude::*;
use std::error::Error;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let ticks: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(90);
    let output = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "sparkfield.png".to_string());

    let config = match std::env::var("SPARKFIELD_CONFIG") {
        Ok(path) => SystemConfig::load(path)?,
        Err(_) => SystemConfig::default(),
    };

    let mut particles = ParticleSystem::with_config(config);
    let mut time = Time::new();
    time.set_fixed_delta(Some(FRAME_MS));

    let base = Vec2::new(300.0, 320.0);
    let camera = Camera2D::centered_on(Vec2::new(400.0, 300.0), 1.0, (WIDTH, HEIGHT));
    let laser = Color::new(0, 255, 255);
    let exhaust = Color::new(255, 180, 80);

    for tick in 0..ticks {
        if tick == 0 {
            particles.add_building_construction(base.x, base.y);
        }
        if tick % 15 == 0 {
            particles.add_power_pulse(base.x + 60.0, base.y);
        }
        if tick % 10 == 5 {
            particles.add_laser_impact(520.0, 240.0, laser);
        }
        if tick == 30 || tick == 60 {
            particles.add_explosion(520.0, 240.0, 1.5);
        }

        // Escort ship flying right along the top of the screen
        let ship = Vec2::new(100.0 + tick as f32 * 6.0, 120.0);
        particles.add_engine_trail(ship.x, ship.y, 1.0, 0.0, exhaust);

        time.tick();
        particles.update(&time);
    }

    let mut canvas = ImageCanvas::new(WIDTH, HEIGHT);
    canvas.clear(Rgba::new(6, 8, 20, 255));
    let stats = particles.draw(&mut canvas, &camera);

    log::info!(
        "{} ticks, {} live particles: {:?}",
        ticks,
        particles.particle_count(),
        particles.count_by_kind()
    );
    canvas.save_png(&output)?;

    println!(
        "Wrote {} ({} drawn, {} culled, {} fallbacks)",
        output, stats.drawn, stats.culled, stats.fallbacks
    );
    Ok(())
}
