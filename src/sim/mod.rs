mod components;
mod pose;
mod tic;

pub use components::{InputCmd, Turn, Walk};
pub use pose::Pose;
pub use tic::{SIM_FPS, TIC, TicRunner};
