//! Dasher entry point
//!
//! Native windowing is not wired up; the binary runs a scripted demo on the
//! headless platform and logs the result. Set `RUST_LOG=debug` to follow
//! jumps and nebula passes.

use dasher::platform::{HeadlessPlatform, Keys};
use dasher::{Game, Settings};

/// Seconds of scripted play
const DEMO_SECONDS: u64 = 12;

fn demo_platform(settings: &Settings) -> HeadlessPlatform {
    let fps = settings.window.target_fps.max(1);
    let second = fps as usize;
    let assets = &settings.assets;

    // Sheet sizes of the stock textures
    HeadlessPlatform::new(1.0 / fps as f32, DEMO_SECONDS * u64::from(fps))
        .with_image(assets.character_sheet.clone(), 768, 128)
        .with_image(assets.nebula_sheet.clone(), 800, 800)
        .hold(Keys::empty(), second)
        .hold(Keys::RIGHT, second)
        .hold(Keys::RIGHT | Keys::JUMP, second / 2)
        .hold(Keys::LEFT, second * 2)
        .hold(Keys::JUMP, 1)
        .hold(Keys::empty(), second)
        .hold(Keys::JUMP, 1)
        .hold(Keys::LEFT | Keys::RIGHT, second)
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    log::info!("{} (headless) starting...", settings.window.title);
    log::info!("Native mode requires a windowing backend - running scripted demo");

    let platform = demo_platform(&settings);
    let mut game = Game::new(platform, settings);

    match game.run() {
        Ok(summary) => log::info!(
            "Demo finished: {} frames, {} nebula passes, progress {}, final position ({:.1}, {:.1})",
            summary.frames,
            summary.collisions,
            summary.progress,
            summary.final_position.x,
            summary.final_position.y
        ),
        Err(e) => {
            log::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    }
}
