//! Frogger entry point
//!
//! Headless runner: plays a fixed number of ticks, optionally under the
//! autopilot, then prints the final frame as text.
//!
//! Usage: `frogger [settings.json]`

use std::path::PathBuf;

use frogger::autopilot::Autopilot;
use frogger::renderer::TextCanvas;
use frogger::sim::GameEvent;
use frogger::{Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Frogger (headless) starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut session = Session::new(&settings);
    let interval = session.tick_interval_ms();
    let autopilot = Autopilot;

    let mut ticks = 0;
    let (mut landings, mut deaths) = (0u32, 0u32);
    while ticks < settings.demo_ticks && !session.is_game_ended() {
        if settings.autopilot {
            for (key, pressed) in autopilot.plan(&session.state).key_events() {
                session.key(key, pressed);
            }
        }
        ticks += session.advance(interval);

        for event in session.drain_events() {
            match event {
                GameEvent::FrogLanded { .. } => landings += 1,
                GameEvent::FrogDied { .. } => deaths += 1,
                _ => {}
            }
        }
    }

    let player = &session.state.player;
    log::info!(
        "Finished after {} ticks: score {}, {} landed, {} lost, {} lives left{}",
        ticks,
        player.score(),
        landings,
        deaths,
        player.lives(),
        if session.is_game_ended() { " (game over)" } else { "" }
    );

    let layout = &session.state.layout;
    let mut canvas = TextCanvas::new(layout.panel_width(), layout.panel_height(), settings.text_cell);
    session.draw(&mut canvas);
    print!("{}", canvas.render());
}
