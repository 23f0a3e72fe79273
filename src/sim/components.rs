/// Forward / backward intent, the `-1 | 0 | +1` movement axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Walk {
    Backward,
    #[default]
    Stop,
    Forward,
}

/// Rotation intent.  `Right` increases the facing angle (clockwise on a
/// y-down screen).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Turn {
    Left,
    #[default]
    Stop,
    Right,
}

impl Walk {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Walk::Backward => -1.0,
            Walk::Stop => 0.0,
            Walk::Forward => 1.0,
        }
    }
}

impl Turn {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Turn::Left => -1.0,
            Turn::Stop => 0.0,
            Turn::Right => 1.0,
        }
    }
}

/// Held intents, edge-triggered by the host: a key press sets an axis,
/// the matching release resets it to `Stop`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCmd {
    pub walk: Walk,
    pub turn: Turn,
}
