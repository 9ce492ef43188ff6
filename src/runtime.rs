//! Fixed-tick runtime
//!
//! Polls input, ticks the sim, presents a frame. Quit is checked before
//! simulating or sleeping so teardown never waits out a tick.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::SIM_DT;
use crate::highscores::HighScores;
use crate::sim::{GamePhase, GameState, TickInput, tick};
use crate::view::{self, FrameView};

/// Frame-local input snapshot supplied by the input collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub intents: TickInput,
    /// Tears the loop down, honored even while waiting in game over
    pub quit: bool,
}

/// Supplies one stable input snapshot per tick; never read twice in a tick
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Consumes one frame snapshot per tick
pub trait FrameSink {
    fn present(&mut self, frame: &FrameView);
}

/// Fixed-tick driver owning the session
pub struct Runtime<I, S> {
    pub state: GameState,
    pub highscores: HighScores,
    input: I,
    sink: S,
    last_phase: GamePhase,
}

impl<I: InputSource, S: FrameSink> Runtime<I, S> {
    pub fn new(seed: u64, input: I, sink: S) -> Self {
        Self {
            state: GameState::new(seed),
            highscores: HighScores::new(),
            input,
            sink,
            last_phase: GamePhase::Playing,
        }
    }

    /// One loop iteration: poll input, advance the simulation, record the
    /// score when a run ends, present the frame. Returns false once the
    /// input collaborator requested quit.
    pub fn step(&mut self) -> bool {
        let frame = self.input.poll();
        if frame.quit {
            log::info!("quit requested, stopping");
            return false;
        }

        tick(&mut self.state, &frame.intents);

        if self.last_phase == GamePhase::Playing && self.state.phase == GamePhase::GameOver {
            let rank = self.highscores.add_score(
                self.state.player.score,
                self.state.level,
                self.state.time_ticks,
            );
            if let Some(rank) = rank {
                log::info!(
                    "final score {} entered the leaderboard at #{}",
                    self.state.player.score,
                    rank
                );
            }
        }
        self.last_phase = self.state.phase;

        self.sink.present(&view::capture(&self.state));
        true
    }

    /// Drive `step` at the fixed tick rate until quit
    pub fn run(&mut self) {
        let tick_len = Duration::from_secs_f32(SIM_DT);
        let mut deadline = Instant::now() + tick_len;

        while self.step() {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
            deadline += tick_len;
        }
    }
}
