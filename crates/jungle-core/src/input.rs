use serde::{Deserialize, Serialize};

/// Per-tick input sampled by the shell before the player update runs.
///
/// The two jump fields are equivalent bindings; either one triggers a jump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump_primary: bool,
    pub jump_secondary: bool,
}

impl InputSnapshot {
    /// Horizontal direction: -1, 0 or +1. Right wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_primary || self.jump_secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_is_idle() {
        let input = InputSnapshot::default();
        assert_eq!(input.horizontal(), 0);
        assert!(!input.jump_pressed());
    }

    #[test]
    fn right_overrides_left() {
        let input = InputSnapshot {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.horizontal(), 1);
    }

    #[test]
    fn either_jump_binding_counts() {
        let primary = InputSnapshot {
            jump_primary: true,
            ..Default::default()
        };
        let secondary = InputSnapshot {
            jump_secondary: true,
            ..Default::default()
        };
        assert!(primary.jump_pressed());
        assert!(secondary.jump_pressed());
    }
}
