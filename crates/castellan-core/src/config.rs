//! Tunable rule parameters.

/// Rule parameters a [`Game`](crate::game::Game) is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Draw once `turn - last irreversible turn` reaches this many plies.
    ///
    /// The counter starts at 1 on the ply after a capture or pawn move, so the
    /// default of 101 means one hundred plies (fifty moves per side) without
    /// either.
    pub fifty_move_plies: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_plies: 101,
        }
    }
}
