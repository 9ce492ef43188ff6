//! Scroll Strike entry point
//!
//! Headless demo session: a scripted pilot stands in for the input
//! collaborator and a console sink stands in for the renderer. Run with
//! `RUST_LOG=info` to watch the HUD; the leaderboard is dumped as JSON at
//! exit.

use scroll_strike::runtime::{FrameSink, InputFrame, InputSource, Runtime};
use scroll_strike::sim::TickInput;
use scroll_strike::view::FrameView;

/// Demo session length in ticks (30 seconds at 60 Hz)
const DEMO_TICKS: u64 = 1800;

/// Scripted stand-in for the input collaborator: runs right, hops and
/// fires on a fixed cadence, restarts after a loss, then quits.
#[derive(Default)]
struct DemoPilot {
    ticks: u64,
}

impl InputSource for DemoPilot {
    fn poll(&mut self) -> InputFrame {
        self.ticks += 1;
        if self.ticks > DEMO_TICKS {
            return InputFrame {
                quit: true,
                ..Default::default()
            };
        }

        let intents = TickInput {
            move_right: self.ticks.is_multiple_of(2),
            jump: self.ticks.is_multiple_of(120),
            shoot: self.ticks.is_multiple_of(15),
            // Ignored while playing; brings a lost run back
            restart: self.ticks.is_multiple_of(240),
            ..Default::default()
        };
        InputFrame {
            intents,
            quit: false,
        }
    }
}

/// Console stand-in for the rendering collaborator
#[derive(Default)]
struct ConsoleSink {
    frames: u64,
    announced_game_over: bool,
}

impl FrameSink for ConsoleSink {
    fn present(&mut self, frame: &FrameView) {
        self.frames += 1;
        match frame {
            FrameView::Playing { sprites, hud } => {
                self.announced_game_over = false;
                if self.frames.is_multiple_of(60) {
                    log::info!(
                        "health {:3}  lives {}  score {:4}  ({} sprites)",
                        hud.health,
                        hud.lives,
                        hud.score,
                        sprites.len()
                    );
                }
            }
            FrameView::GameOver { score } => {
                if !self.announced_game_over {
                    log::info!("game over - final score {score}, waiting for restart");
                    self.announced_game_over = true;
                }
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Scroll Strike (headless demo) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("session seed: {seed}");

    let mut runtime = Runtime::new(seed, DemoPilot::default(), ConsoleSink::default());
    runtime.run();

    println!("✓ demo run complete");
    match serde_json::to_string_pretty(&runtime.highscores) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize leaderboard: {err}"),
    }
}
