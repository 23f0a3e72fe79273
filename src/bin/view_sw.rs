//! Windowed raycaster on the stock level.
//!
//! Controls  ↑/↓ = forward/back  ←/→ = turn  Esc = quit
//!
//! ```bash
//! RUST_LOG=gridcast=debug cargo run --release -- --fov 66 --scale x2
//! ```

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use gridcast::{
    Config, Engine,
    renderer::{RendererExt, software::Software},
    sim::{TicRunner, Turn, Walk},
    world::levels::{DEFAULT_TILE_SIZE, default_level},
};

/// Window upscaling factor.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum WindowScale {
    X1,
    X2,
    X4,
}

impl From<WindowScale> for Scale {
    fn from(s: WindowScale) -> Self {
        match s {
            WindowScale::X1 => Scale::X1,
            WindowScale::X2 => Scale::X2,
            WindowScale::X4 => Scale::X4,
        }
    }
}

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Pixel width of one projected wall strip
    #[arg(long, default_value_t = 1)]
    strip_width: usize,

    /// Forward speed in world units per tick
    #[arg(long, default_value_t = 2.0)]
    move_speed: f32,

    /// Turn speed in degrees per tick
    #[arg(long, default_value_t = 2.0)]
    turn_speed: f32,

    /// Minimap size relative to the world
    #[arg(long, default_value_t = 0.25)]
    minimap_scale: f32,

    /// Window upscaling
    #[arg(long, value_enum, default_value_t = WindowScale::X2)]
    scale: WindowScale,
}

impl Opts {
    fn config(&self) -> Config {
        Config {
            fov: self.fov.to_radians(),
            strip_width: self.strip_width,
            move_speed: self.move_speed,
            turn_speed: self.turn_speed.to_radians(),
            minimap_scale: self.minimap_scale,
            ..Config::default()
        }
    }
}

/// Edge-triggered intents: a press sets the axis, its release clears it.
fn poll_intents(win: &Window, engine: &mut Engine) {
    for (key, walk) in [(Key::Up, Walk::Forward), (Key::Down, Walk::Backward)] {
        if win.is_key_pressed(key, KeyRepeat::No) {
            engine.set_move_intent(walk);
        }
        if win.is_key_released(key) {
            engine.set_move_intent(Walk::Stop);
        }
    }
    for (key, turn) in [(Key::Right, Turn::Right), (Key::Left, Turn::Left)] {
        if win.is_key_pressed(key, KeyRepeat::No) {
            engine.set_turn_intent(turn);
        }
        if win.is_key_released(key) {
            engine.set_turn_intent(Turn::Stop);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();
    let config = opts.config();
    let grid = default_level(DEFAULT_TILE_SIZE).context("building stock level")?;
    let mut engine = Engine::with_default_start(config, grid).context("invalid configuration")?;

    let (w, h) = (config.screen_width, config.screen_height);
    let mut win = Window::new(
        "gridcast",
        w,
        h,
        WindowOptions {
            scale: opts.scale.into(),
            ..WindowOptions::default()
        },
    )
    .context("opening window")?;
    win.set_target_fps(60);

    let mut renderer = Software::default();
    let mut runner = TicRunner::new();
    let mut last = Instant::now();

    // ────────────────── frame-rate report ──────────────────────────────
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        poll_intents(&win, &mut engine);

        let now = Instant::now();
        runner.advance(&mut engine, now - last);
        last = now;

        let calls = engine.frame().draw_calls();
        let mut presented = Ok(());
        renderer.draw_frame(w, h, &calls, |fb, fw, fh| {
            presented = win.update_with_buffer(fb, fw, fh);
        });
        presented.context("presenting frame")?;

        acc_frames += 1;
        if last_print.elapsed() >= Duration::from_secs(1) {
            let fps = acc_frames as f64 / last_print.elapsed().as_secs_f64();
            tracing::info!("{fps:.1} fps");
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
