use std::time::Duration;

use crate::engine::Engine;

pub const SIM_FPS: u32 = 60;
pub const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Longest backlog we are willing to replay after a stall.
const MAX_CATCH_UP: u32 = 10;

/// Drives [`Engine::update`] at a fixed rate, independent of how often the
/// host manages to present a frame.
#[derive(Debug, Default)]
pub struct TicRunner {
    pending: Duration,
}

impl TicRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed real time that has passed since the previous call and run as
    /// many whole tics as fit.  Returns the number of tics executed.
    pub fn advance(&mut self, engine: &mut Engine, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let mut ran = 0;
        while self.pending >= TIC {
            if ran == MAX_CATCH_UP {
                tracing::debug!(dropped = ?self.pending, "simulation fell behind");
                self.pending = Duration::ZERO;
                break;
            }
            engine.update();
            self.pending -= TIC;
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::Walk;
    use crate::world::levels::{DEFAULT_TILE_SIZE, default_level};

    fn engine() -> Engine {
        let grid = default_level(DEFAULT_TILE_SIZE).unwrap();
        Engine::with_default_start(Config::default(), grid).unwrap()
    }

    #[test]
    fn runs_whole_tics_and_keeps_remainder() {
        let mut eng = engine();
        let mut runner = TicRunner::new();
        assert_eq!(runner.advance(&mut eng, TIC / 2), 0);
        assert_eq!(runner.advance(&mut eng, TIC), 1);
        assert_eq!(runner.advance(&mut eng, TIC * 3), 3);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut eng = engine();
        eng.set_move_intent(Walk::Forward);
        let mut runner = TicRunner::new();
        assert_eq!(runner.advance(&mut eng, Duration::from_secs(5)), MAX_CATCH_UP);
        assert_eq!(runner.advance(&mut eng, Duration::ZERO), 0);
    }
}
