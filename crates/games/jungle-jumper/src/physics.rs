use serde::{Deserialize, Serialize};

use jungle_core::geometry::Rect;

use crate::config::PhysicsConfig;

/// Accumulate one frame of gravity, clamped to the terminal fall speed.
pub fn apply_gravity(velocity_y: f32, physics: &PhysicsConfig) -> f32 {
    (velocity_y + physics.gravity).min(physics.max_fall_speed)
}

/// Outcome of resolving one frame's proposed displacement against platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub dx: f32,
    pub dy: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    /// Exact top edge after a vertical snap. Assigned directly instead of
    /// `y + dy` so the contact edge equals the platform edge bit-for-bit.
    snap_y: Option<f32>,
}

impl Resolution {
    /// `rect` moved by the resolved displacement.
    pub fn apply(&self, rect: &Rect) -> Rect {
        let mut moved = rect.translated(self.dx, self.dy);
        if let Some(y) = self.snap_y {
            moved.y = y;
        }
        moved
    }
}

/// Axis-separated collision against static platforms.
///
/// Horizontal: if `rect` moved by `dx` alone overlaps a platform, `dx` is
/// zeroed. Vertical: if `rect` moved by `dy` alone overlaps a platform, the
/// rectangle snaps to the platform's bottom (moving up) or top (moving down
/// or still, which also sets `on_ground`), and vertical velocity is zeroed.
/// The axes are tested independently, so a diagonal move into a corner can
/// keep both components; that snap is accepted behavior.
pub fn resolve_platform_collisions(
    rect: &Rect,
    dx: f32,
    dy: f32,
    velocity_y: f32,
    platforms: &[Rect],
) -> Resolution {
    let mut res = Resolution {
        dx,
        dy,
        velocity_y,
        on_ground: false,
        snap_y: None,
    };

    for plat in platforms {
        if plat.overlaps(&rect.translated(res.dx, 0.0)) {
            res.dx = 0.0;
        }

        if plat.overlaps(&rect.translated(0.0, res.dy)) {
            if res.velocity_y < 0.0 {
                // Head bump
                res.dy = plat.bottom() - rect.top();
                res.snap_y = Some(plat.bottom());
            } else {
                res.dy = plat.top() - rect.bottom();
                res.snap_y = Some(plat.top() - rect.h);
                res.on_ground = true;
            }
            res.velocity_y = 0.0;
        }
    }

    res
}

/// A rectangle under gravity with no horizontal inertia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub rect: Rect,
    pub velocity_y: f32,
    pub on_ground: bool,
}

impl KinematicBody {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity_y: 0.0,
            on_ground: false,
        }
    }

    /// Integrate one frame: gravity, then `dx` and the resulting `dy` are
    /// resolved against `platforms` and applied to the position.
    pub fn step(&mut self, dx: f32, platforms: &[Rect], physics: &PhysicsConfig) {
        self.velocity_y = apply_gravity(self.velocity_y, physics);
        let res =
            resolve_platform_collisions(&self.rect, dx, self.velocity_y, self.velocity_y, platforms);
        self.velocity_y = res.velocity_y;
        self.on_ground = res.on_ground;
        self.rect = res.apply(&self.rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    fn ground() -> Rect {
        Rect::new(0.0, 560.0, 800.0, 40.0)
    }

    #[test]
    fn gravity_accumulates() {
        let p = physics();
        assert_eq!(apply_gravity(0.0, &p), 0.8);
        assert_eq!(apply_gravity(-15.0, &p), -14.2);
    }

    #[test]
    fn gravity_clamps_at_terminal_speed() {
        let p = physics();
        assert_eq!(apply_gravity(9.5, &p), 10.0);
        assert_eq!(apply_gravity(10.0, &p), 10.0);
    }

    #[test]
    fn free_fall_moves_by_velocity() {
        let rect = Rect::new(100.0, 400.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 0.0, 0.8, 0.8, &[ground()]);
        assert_eq!(res.dy, 0.8);
        assert_eq!(res.velocity_y, 0.8);
        assert!(!res.on_ground);
        assert_eq!(res.apply(&rect).y, 400.0 + 0.8);
    }

    #[test]
    fn landing_snaps_to_platform_top() {
        let rect = Rect::new(100.0, 495.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 0.0, 10.0, 10.0, &[ground()]);
        assert_eq!(res.dy, 5.0);
        assert_eq!(res.velocity_y, 0.0);
        assert!(res.on_ground);
        assert_eq!(res.apply(&rect).bottom(), 560.0);
    }

    #[test]
    fn zero_velocity_contact_counts_as_landing() {
        // Resting exactly on the ground with velocity 0 and a proposed dy of 0
        // does not overlap, but the next frame's gravity nudge does.
        let rect = Rect::new(100.0, 500.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 0.0, 0.8, 0.8, &[ground()]);
        assert!(res.on_ground);
        assert_eq!(res.dy, 0.0);
        assert_eq!(res.apply(&rect), rect);
    }

    #[test]
    fn ceiling_snaps_to_platform_bottom() {
        let ledge = Rect::new(200.0, 450.0, 150.0, 20.0);
        let rect = Rect::new(220.0, 475.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 0.0, -10.0, -10.0, &[ledge]);
        assert_eq!(res.dy, -5.0);
        assert_eq!(res.velocity_y, 0.0);
        assert!(!res.on_ground, "Head bump is not a landing");
        assert_eq!(res.apply(&rect).top(), 470.0);
    }

    #[test]
    fn horizontal_overlap_zeroes_dx_without_sliding() {
        let wall = Rect::new(150.0, 400.0, 20.0, 200.0);
        let rect = Rect::new(108.0, 450.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 5.0, 0.0, 0.0, &[wall]);
        // 3 units of free space are not used: the whole move is cancelled.
        assert_eq!(res.dx, 0.0);
        assert_eq!(res.apply(&rect).x, 108.0);
    }

    #[test]
    fn horizontal_motion_along_ground_is_free() {
        let rect = Rect::new(100.0, 500.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 5.0, 0.8, 0.8, &[ground()]);
        assert_eq!(res.dx, 5.0);
        assert!(res.on_ground);
    }

    #[test]
    fn axes_resolve_independently() {
        // Blocked sideways by a wall while landing on the ground.
        let wall = Rect::new(142.0, 300.0, 20.0, 260.0);
        let rect = Rect::new(100.0, 498.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 5.0, 4.0, 4.0, &[ground(), wall]);
        assert_eq!(res.dx, 0.0);
        assert!(res.on_ground);
        assert_eq!(res.apply(&rect).bottom(), 560.0);
    }

    #[test]
    fn diagonal_corner_keeps_both_components() {
        // Neither axis alone overlaps the block, so the corner is entered.
        let block = Rect::new(145.0, 565.0, 50.0, 20.0);
        let rect = Rect::new(100.0, 500.0, 40.0, 60.0);
        let res = resolve_platform_collisions(&rect, 8.0, 8.0, 8.0, &[block]);
        assert_eq!(res.dx, 8.0);
        assert_eq!(res.dy, 8.0);
        assert!(res.apply(&rect).overlaps(&block));
    }

    #[test]
    fn body_step_lands_and_stays() {
        let p = physics();
        let mut body = KinematicBody::new(Rect::new(100.0, 400.0, 40.0, 60.0));
        for _ in 0..60 {
            body.step(0.0, &[ground()], &p);
        }
        assert!(body.on_ground);
        assert_eq!(body.velocity_y, 0.0);
        assert_eq!(body.rect.bottom(), 560.0);

        body.step(0.0, &[ground()], &p);
        assert!(body.on_ground, "Resting body must stay grounded");
        assert_eq!(body.rect.bottom(), 560.0);
    }

    #[test]
    fn body_step_walks_on_ground() {
        let p = physics();
        let mut body = KinematicBody::new(Rect::new(100.0, 500.0, 40.0, 60.0));
        for _ in 0..10 {
            body.step(p.player_speed, &[ground()], &p);
        }
        assert_eq!(body.rect.x, 150.0);
        assert!(body.on_ground);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn vertical_resolution_never_leaves_overlap(
                px in 0i32..600,
                py in 100i32..500,
                pw in 50i32..200,
                rx in -50i32..650,
                ry in 0i32..600,
                vy in -15i32..=10,
            ) {
                let plat = Rect::new(px as f32, py as f32, pw as f32, 20.0);
                let rect = Rect::new(rx as f32, ry as f32, 40.0, 60.0);
                prop_assume!(!rect.overlaps(&plat));

                let vy = vy as f32;
                let res = resolve_platform_collisions(&rect, 0.0, vy, vy, &[plat]);
                prop_assert!(!res.apply(&rect).overlaps(&plat));
            }

            #[test]
            fn horizontal_resolution_never_leaves_overlap(
                px in 0i32..600,
                py in 100i32..500,
                ph in 20i32..200,
                rx in -50i32..650,
                ry in 0i32..600,
                dx in -5i32..=5,
            ) {
                let plat = Rect::new(px as f32, py as f32, 20.0, ph as f32);
                let rect = Rect::new(rx as f32, ry as f32, 40.0, 60.0);
                prop_assume!(!rect.overlaps(&plat));

                let res = resolve_platform_collisions(&rect, dx as f32, 0.0, 0.0, &[plat]);
                prop_assert!(!res.apply(&rect).overlaps(&plat));
            }

            #[test]
            fn landing_sets_ground_and_zero_velocity(
                rx in 0i32..760,
                gap in 1i32..10,
                vy in 0i32..=10,
            ) {
                let plat = Rect::new(0.0, 560.0, 800.0, 40.0);
                let rect = Rect::new(rx as f32, (500 - gap) as f32, 40.0, 60.0);
                let vy = vy as f32;
                let res = resolve_platform_collisions(&rect, 0.0, vy, vy, &[plat]);
                if rect.translated(0.0, vy).overlaps(&plat) {
                    prop_assert!(res.on_ground);
                    prop_assert_eq!(res.velocity_y, 0.0);
                    prop_assert_eq!(res.apply(&rect).bottom(), plat.top());
                } else {
                    prop_assert!(!res.on_ground);
                    prop_assert_eq!(res.velocity_y, vy);
                }
            }

            #[test]
            fn free_fall_velocity_never_exceeds_terminal(frames in 1usize..400) {
                let p = PhysicsConfig::default();
                let mut body = KinematicBody::new(Rect::new(0.0, 0.0, 40.0, 60.0));
                for _ in 0..frames {
                    body.step(0.0, &[], &p);
                    prop_assert!(body.velocity_y <= p.max_fall_speed);
                }
            }
        }
    }
}
