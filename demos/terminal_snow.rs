//! # Terminal Snow
//!
//! Snowfall rendered as text. Each character cell is one "pixel" and each
//! particle is drawn at the center of its quad.
//!
//! Run with: `cargo run --example terminal_snow -- [frames] [angle]`
//!
//! Set `RUST_LOG=debug` to see reconciliation messages.

use snowfall::prelude::*;
use std::io::Write;
use std::thread;
use std::time::Duration;

const COLS: usize = 80;
const ROWS: usize = 24;
const FRAME_TIME: Duration = Duration::from_millis(33);

fn glyph(quad: &Quad, size: f64) -> char {
    if quad.width() < 0.3 {
        '|'
    } else if size > 0.8 {
        '*'
    } else if size > 0.6 {
        '+'
    } else {
        '.'
    }
}

fn render(system: &ParticleSystem, frame: &mut [[char; COLS]; ROWS]) -> String {
    for row in frame.iter_mut() {
        row.fill(' ');
    }

    system.for_each_particle(|quad, size| {
        // Clamped flat against the top or bottom edge.
        if quad.height() <= 0.0 {
            return;
        }
        let center = quad.center();
        let col = (center.x as usize).min(COLS - 1);
        let row = (center.y as usize).min(ROWS - 1);
        frame[row][col] = glyph(quad, size);
    });

    let mut out = String::with_capacity((COLS + 1) * ROWS);
    for row in frame.iter() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::init();

    let frames: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);
    let angle: f64 = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(15.0);

    let config = SimulationConfig::snow()
        .with_particle_count(120)
        .with_fall_angle(angle)
        .with_speed(0.6)
        .with_spin_speed(8.0)
        .with_viewport(Rect::from_size(COLS as f64, ROWS as f64));

    let mut snow = ParticleSystem::new(config);
    // One character cell per flake.
    snow.set_sprite(Sprite::new(1.0, 1.0, 1));

    let mut frame = [[' '; COLS]; ROWS];
    let stdout = std::io::stdout();

    for i in 0..frames {
        // Thicken the snowfall halfway through without resetting it.
        if i == frames / 2 {
            snow.set_particle_count(240);
        }

        snow.advance_frame();
        let text = render(&snow, &mut frame);

        let mut lock = stdout.lock();
        if write!(lock, "\x1b[H\x1b[2J{}", text).and_then(|_| lock.flush()).is_err() {
            break;
        }
        thread::sleep(FRAME_TIME);
    }
}
