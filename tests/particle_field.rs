//! Integration tests for the particle field.
//!
//! These drive a [`ParticleSystem`] through the same sequence of calls a host
//! renderer makes: configure, reconcile, advance, read quads.

use snowfall::prelude::*;
use snowfall::sprite;

const EPS: f64 = 1e-9;

fn viewport() -> Rect {
    Rect::from_size(1024.0, 768.0)
}

/// Whether `(x, y)` lies on one of the four entry edges for `inc`.
fn on_edge(x: f64, y: f64, inc: f64) -> bool {
    let on = |v: f64, t: f64| (v - t).abs() < EPS;
    on(x, inc) || on(x, 1.0 - inc) || on(y, inc) || on(y, 1.0 - inc)
}

// ============================================================================
// Per-frame transition
// ============================================================================

#[test]
fn test_every_frame_either_steps_or_respawns_on_edge() {
    for angle in [0.0, 30.0, 90.0, 135.0, 180.0, 250.0, -45.0] {
        let config = SimulationConfig::snow()
            .with_particle_count(60)
            .with_fall_angle(angle)
            .with_speed(2.0)
            .with_viewport(viewport());
        let mut system = ParticleSystem::seeded(config, 100);
        let (sin, cos) = system.config().fall_direction();

        for _ in 0..400 {
            let before: Vec<(f64, f64)> =
                system.particles().iter().map(|p| (p.x(), p.y())).collect();
            system.advance_frame();

            for (p, (bx, by)) in system.particles().iter().zip(before) {
                let inc = p.movement_increment(system.config());
                let stepped = (p.x() - (bx + inc * sin)).abs() < EPS
                    && (p.y() - (by + inc * cos)).abs() < EPS;
                assert!(
                    stepped || on_edge(p.x(), p.y(), inc),
                    "angle {angle}: ({bx}, {by}) -> ({}, {})",
                    p.x(),
                    p.y()
                );
            }
        }
    }
}

#[test]
fn test_quads_are_well_formed_for_every_orientation() {
    for orientation in [None, Some(Axis::Horizontal), Some(Axis::Vertical)] {
        let config = SimulationConfig::blizzard()
            .with_spin_orientation(orientation)
            .with_viewport(viewport());
        let mut system = ParticleSystem::seeded(config, 7);
        for _ in 0..120 {
            system.advance_frame();
            system.for_each_particle(|quad, _| {
                assert!(quad.left <= quad.right);
                assert!(quad.top <= quad.bottom);
                assert!(quad.left >= 0.0 && quad.right <= 1024.0);
                assert!(quad.top >= 0.0 && quad.bottom <= 768.0);
            });
        }
    }
}

// ============================================================================
// Reconciliation
// ============================================================================

#[test]
fn test_count_changes_follow_grow_and_rebuild_rules() {
    let flake = Sprite::snowflake();
    let mut system = ParticleSystem::seeded(
        SimulationConfig::snow()
            .with_particle_count(0)
            .with_viewport(viewport()),
        21,
    );
    system.set_sprite(flake);
    system.reconcile(10, flake.signature);
    for _ in 0..5 {
        system.advance_frame();
    }
    let first: Vec<_> = system
        .particles()
        .iter()
        .map(|p| (p.x(), p.y(), p.size(), p.speed_jitter()))
        .collect();

    system.reconcile(30, flake.signature);
    let grown: Vec<_> = system
        .particles()
        .iter()
        .map(|p| (p.x(), p.y(), p.size(), p.speed_jitter()))
        .collect();
    assert_eq!(grown.len(), 30);
    assert_eq!(&grown[..10], &first[..]);

    system.reconcile(30, flake.signature);
    assert_eq!(system.len(), 30);

    system.reconcile(8, flake.signature);
    assert_eq!(system.len(), 8);
    assert!(system
        .particles()
        .iter()
        .all(|p| !first.contains(&(p.x(), p.y(), p.size(), p.speed_jitter()))));
}

#[test]
fn test_swapping_sprite_rebuilds_field() {
    let mut system = ParticleSystem::seeded(
        SimulationConfig::snow()
            .with_particle_count(20)
            .with_viewport(viewport()),
        22,
    );
    system.set_sprite(Sprite::snowflake());
    let before: Vec<_> = system.particles().iter().map(|p| p.position()).collect();

    let mut image = sprite::snowflake();
    image.put_pixel(0, 0, sprite::SNOWFLAKE_COLOR);
    let altered = Sprite::from_image(&image).unwrap();
    system.set_sprite(altered);

    assert_eq!(system.len(), 20);
    assert_eq!(system.signature(), altered.signature);
    assert!(system
        .particles()
        .iter()
        .all(|p| !before.contains(&p.position())));
}

// ============================================================================
// Degenerate configurations
// ============================================================================

#[test]
fn test_zero_width_size_interval() {
    let mut system = ParticleSystem::seeded(
        SimulationConfig::snow()
            .with_size_range(0.4, 0.4)
            .with_viewport(viewport()),
        30,
    );
    for _ in 0..300 {
        system.advance_frame();
    }
    assert!(system.particles().iter().all(|p| p.size() == 0.4));
}

#[test]
fn test_reversed_size_interval_samples_between_bounds() {
    let mut system = ParticleSystem::seeded(
        SimulationConfig::snow()
            .with_size_range(2.0, 1.0)
            .with_viewport(viewport()),
        31,
    );
    for _ in 0..300 {
        system.advance_frame();
        for p in system.particles() {
            assert!(p.size() >= 1.0 && p.size() < 2.0, "size {}", p.size());
        }
    }
}

#[test]
fn test_missing_viewport_never_panics() {
    let mut system = ParticleSystem::seeded(SimulationConfig::drift(), 32);
    let fallback = system.config().projection_rect();
    for _ in 0..200 {
        system.advance_frame();
    }
    for quad in system.quads() {
        assert!(quad.right <= fallback.max_x);
        assert!(quad.bottom <= fallback.max_y);
    }
}

#[test]
fn test_instances_cast_to_bytes() {
    let mut system = ParticleSystem::seeded(
        SimulationConfig::snow()
            .with_particle_count(16)
            .with_viewport(viewport()),
        33,
    );
    system.advance_frame();
    let instances = system.instances();
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), 16 * std::mem::size_of::<QuadInstance>());
}
