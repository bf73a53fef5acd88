//! Paddle Rally entry point
//!
//! Headless frame driver: runs a round with an autopilot paddle at a fixed
//! frame delta and prints the final snapshot as JSON.

use std::path::Path;

use paddle_rally::consts::*;
use paddle_rally::{Arena, Command, Engine, FrameInput, PointerDrag, RoundState, Settings};

/// Frame delta for the headless loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Stop after this many frames even if balls remain (two minutes)
const MAX_FRAMES: u32 = 60 * 120;
/// Autopilot adds a ball this often
const ADD_BALL_EVERY: u32 = 60 * 10;

/// Track the falling ball closest to the bottom edge
fn autopilot_target(engine: &Engine) -> Option<f32> {
    engine
        .state()
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|b| b.pos.x)
}

fn main() {
    env_logger::init();
    log::info!("Paddle Rally (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let arena = Arena::from_size(ARENA_WIDTH, ARENA_HEIGHT);
    let mut engine = Engine::new(arena, settings);
    let mut input = FrameInput::new(arena);
    input.commands.push(Command::Start);

    let mut frame: u32 = 0;
    while frame < MAX_FRAMES {
        input.drag = autopilot_target(&engine).map(PointerDrag::Absolute);
        if frame > 0 && frame.is_multiple_of(ADD_BALL_EVERY) {
            input.commands.push(Command::AddBall);
        }

        engine.update(FRAME_DT, &input);
        input.commands.clear();
        frame += 1;

        if engine.round() == RoundState::GameOver {
            break;
        }
    }

    let snapshot = engine.snapshot();
    log::info!(
        "Finished after {} frames: {} with score {}",
        frame,
        snapshot.round.as_str(),
        snapshot.score
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
