pub mod geometry;
pub mod input;
pub mod render;
pub mod sim_trait;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::input::InputSnapshot;
    use crate::sim_trait::{SimEvent, Simulation};

    /// Input with only the given horizontal direction held.
    pub fn held(direction: i8) -> InputSnapshot {
        InputSnapshot {
            left: direction < 0,
            right: direction > 0,
            ..Default::default()
        }
    }

    /// Input with the primary jump binding held.
    pub fn jump() -> InputSnapshot {
        InputSnapshot {
            jump_primary: true,
            ..Default::default()
        }
    }

    /// Run N ticks with the same input, returning all accumulated events.
    pub fn run_ticks(
        sim: &mut dyn Simulation,
        n: usize,
        input: &InputSnapshot,
    ) -> Vec<SimEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(sim.update(input));
        }
        all_events
    }

    // ================================================================
    // Simulation Contract Tests
    // ================================================================
    // Every Simulation implementation must pass these. Game crates call
    // them from their own #[cfg(test)] modules with a freshly reset
    // instance.

    /// reset() after arbitrary play must reproduce the fresh snapshot byte-for-byte.
    pub fn contract_reset_restores_initial_state(sim: &mut dyn Simulation, ticks: usize) {
        sim.reset();
        let fresh = sim.serialize_state();

        let inputs = [held(1), jump(), held(-1), InputSnapshot::default()];
        for i in 0..ticks {
            sim.update(&inputs[i % inputs.len()]);
        }
        assert_ne!(
            fresh,
            sim.serialize_state(),
            "State should change while playing"
        );

        sim.reset();
        assert_eq!(
            fresh,
            sim.serialize_state(),
            "reset() must restore the initial state exactly"
        );
    }

    /// draw() must not change the state.
    pub fn contract_draw_is_read_only(sim: &mut dyn Simulation) {
        let before = sim.serialize_state();
        let commands = sim.draw();
        assert!(!commands.is_empty(), "draw() must emit at least one command");
        assert_eq!(before, sim.serialize_state(), "draw() must not mutate state");
    }

    /// pause() must freeze updates, resume() must unfreeze them.
    pub fn contract_pause_stops_updates(sim: &mut dyn Simulation) {
        sim.pause();
        let before = sim.serialize_state();
        sim.update(&held(1));
        assert_eq!(
            before,
            sim.serialize_state(),
            "State must not change while paused"
        );

        sim.resume();
        sim.update(&held(1));
        assert_ne!(
            before,
            sim.serialize_state(),
            "State must change after resume"
        );
    }

    /// serialize_state → apply_state must be stable.
    pub fn contract_state_roundtrip_preserves(sim: &mut dyn Simulation) {
        let state_a = sim.serialize_state();
        sim.apply_state(&state_a);
        let state_b = sim.serialize_state();
        assert_eq!(
            state_a, state_b,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// Garbage snapshots are ignored rather than corrupting state.
    pub fn contract_apply_garbage_is_ignored(sim: &mut dyn Simulation) {
        let before = sim.serialize_state();
        sim.apply_state(&[0xc1, 0xff, 0x00]);
        assert_eq!(
            before,
            sim.serialize_state(),
            "apply_state() must ignore undecodable input"
        );
    }
}
