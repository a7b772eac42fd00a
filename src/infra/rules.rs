use crate::infra::Square;
use crate::state::{Action, GameState, PlayerState};

/// Outcome probabilities of one block, as computed by the engine's dice model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockOdds {
    /// Attacker ends up on the ground
    pub attacker_down: f32,
    /// Defender ends up on the ground
    pub defender_down: f32,
    /// Attacker loses the ball
    pub attacker_fumble: f32,
    /// Defender loses the ball
    pub defender_fumble: f32,
}

impl BlockOdds {
    pub fn attacker_up(&self) -> f32 {
        1.0 - self.attacker_down
    }
}

/// Engine-side rule queries. Implemented by the adapter around the rules
/// engine; the planner never evaluates dice itself.
pub trait Rules {
    /// Whether the engine would accept `action` right now.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool;

    fn block_odds(&self, state: &GameState, attacker: &PlayerState, defender: &PlayerState)
    -> BlockOdds;

    /// Odds of a blitz block thrown from `from` after moving there.
    fn blitz_odds(
        &self,
        state: &GameState,
        attacker: &PlayerState,
        from: Square,
        defender: &PlayerState,
    ) -> BlockOdds;

    /// (attacker strength, defender strength) including assists.
    fn block_strengths(
        &self,
        state: &GameState,
        attacker: &PlayerState,
        defender: &PlayerState,
    ) -> (i32, i32);

    fn catch_probability(&self, state: &GameState, catcher: &PlayerState, handoff: bool) -> f32;
}
