use serde::{Deserialize, Serialize};

use crate::input::InputSnapshot;
use crate::render::RenderCommand;
use crate::time::TICK_RATE_HZ;

/// Contract between a fixed-step simulation and the shell that drives it.
///
/// The shell calls `update` once per simulation step and `draw` once per
/// render frame. `draw` takes `&self`, so a frame is always rendered from a
/// fully completed update. The simulation never calls back into the shell;
/// it reports what happened through the returned events.
pub trait Simulation {
    /// Rebuild the initial layout.
    fn reset(&mut self);

    /// Advance one step with the given input snapshot.
    fn update(&mut self, input: &InputSnapshot) -> Vec<SimEvent>;

    /// Emit draw instructions for the current state.
    fn draw(&self) -> Vec<RenderCommand>;

    /// Serialize the complete simulation state.
    fn serialize_state(&self) -> Vec<u8>;

    /// Replace the simulation state with a previously serialized snapshot.
    /// Undecodable input is ignored.
    fn apply_state(&mut self, state: &[u8]);

    /// Steps per second the animation clock assumes.
    fn tick_rate(&self) -> f32 {
        TICK_RATE_HZ
    }

    fn pause(&mut self);

    fn resume(&mut self);
}

/// Things that happened during a single update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// The player left the ground through the jump control.
    Jumped,
    /// The player touched the enemy at this index in the enemy list.
    PlayerCaught { enemy: usize },
    /// The level was rebuilt from its initial layout.
    LevelReset,
}

/// Generates the snapshot and pause methods shared by simulations.
///
/// Requires the implementing struct to have `state: $StateType` and
/// `paused: bool` fields.
#[macro_export]
macro_rules! simulation_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).expect("simulation state serialization must succeed")
        }

        fn apply_state(&mut self, state: &[u8]) {
            if let Ok(s) = rmp_serde::from_slice::<$StateType>(state) {
                self.state = s;
            }
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn resume(&mut self) {
            self.paused = false;
        }
    };
}
