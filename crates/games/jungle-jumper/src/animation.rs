use std::fmt::Debug;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use jungle_core::time::ANIMATION_STEP;

use crate::error::ConfigError;

/// Closed set of animation keys for one kind of entity.
pub trait AnimationKey: Copy + Debug + 'static {
    /// Every key, in `index()` order.
    const ALL: &'static [Self];

    fn index(self) -> usize;
}

/// Frame identifier sequences for every key of `K`, validated non-empty.
#[derive(Debug, Clone)]
pub struct AnimationTable<K: AnimationKey> {
    sequences: Vec<Vec<String>>,
    speed: f32,
    _key: PhantomData<K>,
}

impl<K: AnimationKey> AnimationTable<K> {
    /// Build the table by asking `frames_for` for each key. An empty
    /// sequence is a configuration error.
    pub fn new(
        entity: &'static str,
        speed: f32,
        frames_for: impl Fn(K) -> Vec<String>,
    ) -> Result<Self, ConfigError> {
        let mut sequences = Vec::with_capacity(K::ALL.len());
        for &key in K::ALL {
            debug_assert_eq!(key.index(), sequences.len());
            let frames = frames_for(key);
            if frames.is_empty() {
                return Err(ConfigError::EmptyAnimation {
                    entity,
                    key: format!("{key:?}"),
                });
            }
            sequences.push(frames);
        }
        Ok(Self {
            sequences,
            speed,
            _key: PhantomData,
        })
    }

    pub fn frames(&self, key: K) -> &[String] {
        &self.sequences[key.index()]
    }

    /// Frame identifier at `index`, wrapping around the sequence.
    pub fn frame(&self, key: K, index: usize) -> &str {
        let frames = self.frames(key);
        &frames[index % frames.len()]
    }

    /// Seconds a frame stays up before advancing.
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

/// Fixed-step animation clock: frame index plus time on the current frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    pub frame_index: usize,
    pub timer: f32,
}

impl Animator {
    /// One tick of the animation clock. Once the timer passes `speed` it
    /// restarts and the frame index moves on, wrapping at `frame_count`.
    pub fn advance(&mut self, frame_count: usize, speed: f32) {
        self.timer += ANIMATION_STEP;
        if self.timer > speed {
            self.timer = 0.0;
            self.frame_index = (self.frame_index + 1) % frame_count.max(1);
        }
    }

    /// Advance using the sequence for `key` in `table`.
    pub fn advance_in<K: AnimationKey>(&mut self, table: &AnimationTable<K>, key: K) {
        self.advance(table.frames(key).len(), table.speed());
    }

    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Light {
        On,
        Off,
    }

    impl AnimationKey for Light {
        const ALL: &'static [Self] = &[Light::On, Light::Off];

        fn index(self) -> usize {
            self as usize
        }
    }

    fn names(n: usize, prefix: &str) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}_{i}")).collect()
    }

    #[test]
    fn table_lookup_by_key() {
        let table = AnimationTable::new("lamp", 0.1, |k| match k {
            Light::On => names(3, "on"),
            Light::Off => names(1, "off"),
        })
        .unwrap();
        assert_eq!(table.frames(Light::On).len(), 3);
        assert_eq!(table.frame(Light::On, 1), "on_1");
        assert_eq!(table.frame(Light::On, 4), "on_1");
        assert_eq!(table.frame(Light::Off, 7), "off_0");
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = AnimationTable::new("lamp", 0.1, |k| match k {
            Light::On => names(2, "on"),
            Light::Off => Vec::new(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyAnimation {
                entity: "lamp",
                key: "Off".to_string(),
            }
        );
    }

    #[test]
    fn animator_holds_frame_until_threshold() {
        let mut anim = Animator::default();
        for _ in 0..5 {
            anim.advance(2, 0.1);
        }
        assert_eq!(anim.frame_index, 0, "5/60 s is under the 0.1 s threshold");

        anim.advance(2, 0.1);
        anim.advance(2, 0.1);
        assert_eq!(anim.frame_index, 1, "Frame should advance by 7/60 s");
    }

    #[test]
    fn animator_wraps_and_resets_timer() {
        let mut anim = Animator::default();
        let mut advanced = 0;
        for _ in 0..100 {
            let before = anim.frame_index;
            anim.advance(2, 0.1);
            if anim.frame_index != before {
                advanced += 1;
                assert_eq!(anim.timer, 0.0);
            }
            assert!(anim.frame_index < 2);
        }
        assert!(advanced >= 14, "Expected regular advances, got {advanced}");
    }

    #[test]
    fn single_frame_sequence_stays_put() {
        let mut anim = Animator::default();
        for _ in 0..30 {
            anim.advance(1, 0.1);
        }
        assert_eq!(anim.frame_index, 0);
    }

    #[test]
    fn restart_clears_progress() {
        let mut anim = Animator {
            frame_index: 1,
            timer: 0.05,
        };
        anim.restart();
        assert_eq!(anim, Animator::default());
    }
}
