//! Scripted input for headless runs.
//!
//! A script is a JSON array of steps, each holding a set of controls for a
//! number of frames:
//!
//! ```json
//! [{ "right": true, "frames": 30 }, { "jump": true, "frames": 1 }]
//! ```

use serde::{Deserialize, Serialize};

use jungle_core::sim_trait::SimEvent;

use crate::app::GameState;
use crate::audio::MusicPlayer;
use crate::input::InputState;
use crate::Shell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayStep {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default = "one_frame")]
    pub frames: u32,
}

fn one_frame() -> u32 {
    1
}

impl ReplayStep {
    /// No keys held for `frames` frames.
    pub fn idle(frames: u32) -> Self {
        Self {
            left: false,
            right: false,
            jump: false,
            frames,
        }
    }
}

pub fn parse_script(json: &str) -> Result<Vec<ReplayStep>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Totals gathered while replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: u64,
    pub jumps: u64,
    pub caught: u64,
}

impl ReplaySummary {
    /// Simulated time covered by the replayed frames.
    pub fn seconds(&self, tick_rate: f32) -> f32 {
        self.frames as f32 / tick_rate
    }
}

/// Feed `steps` to the shell one frame at a time, drawing after each update.
///
/// Stops early once the shell leaves the playing state.
pub fn run<M: MusicPlayer>(shell: &mut Shell<M>, steps: &[ReplayStep]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    let mut input = InputState::new();

    for step in steps {
        input.release_all();
        let keys = shell.config().keys.clone();
        if step.left {
            input.on_key_down(keys.left);
        }
        if step.right {
            input.on_key_down(keys.right);
        }
        if step.jump {
            input.on_key_down(keys.jump_primary);
        }

        for _ in 0..step.frames {
            if shell.state() != GameState::Playing {
                return summary;
            }
            for event in shell.update(&input) {
                match event {
                    SimEvent::Jumped => summary.jumps += 1,
                    SimEvent::PlayerCaught { .. } => summary.caught += 1,
                    SimEvent::LevelReset => {},
                }
            }
            // No window to present to; the draw pass still runs every frame
            // so replays follow the same update-then-draw order as a host.
            let _ = shell.draw();
            summary.frames += 1;
        }
    }
    summary
}
