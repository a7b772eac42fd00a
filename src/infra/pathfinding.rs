use crate::infra::Square;
use crate::state::{ActionKind, GameState, PlayerState};

/// A movement plan produced by the external pathfinder.
///
/// `steps` excludes the mover's starting square, except for a prone mover
/// whose path opens with their own square (the stand-up). The optional rolls mark that
/// the last step is not a plain move but a block, hand-off or foul on the
/// player standing there.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub steps: Vec<Square>,
    /// Product of the per-step success chances, in [0, 1]
    pub prob: f32,
    pub block_dice: Option<i32>,
    pub handoff_roll: Option<i32>,
    pub foul_roll: Option<i32>,
}

impl Path {
    pub fn new(steps: Vec<Square>, prob: f32) -> Self {
        Self {
            steps,
            prob,
            block_dice: None,
            handoff_roll: None,
            foul_roll: None,
        }
    }

    pub fn with_block(mut self, dice: i32) -> Self {
        self.block_dice = Some(dice);
        self
    }

    pub fn with_handoff(mut self, roll: i32) -> Self {
        self.handoff_roll = Some(roll);
        self
    }

    pub fn with_foul(mut self, roll: i32) -> Self {
        self.foul_roll = Some(roll);
        self
    }

    pub fn last_step(&self) -> Option<Square> {
        self.steps.last().copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_certain(&self) -> bool {
        self.prob >= 1.0
    }

    /// Action performed on the destination square. Only one marker should be
    /// set; if several are, block wins over hand-off, hand-off over foul.
    pub fn terminal_kind(&self) -> ActionKind {
        if self.block_dice.is_some() {
            ActionKind::Block
        } else if self.handoff_roll.is_some() {
            ActionKind::Handoff
        } else if self.foul_roll.is_some() {
            ActionKind::Foul
        } else {
            ActionKind::Move
        }
    }
}

/// Where a safest-path query should lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathTarget {
    Square(Square),
    /// Any square of the column the mover's team scores in
    Endzone,
}

/// Constraints for an all-paths query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathQuery {
    /// Paths ending in a block on a standing opponent
    pub blitz: bool,
    /// Search from this square instead of the player's position
    pub from: Option<Square>,
    /// Movement already spent before the search starts
    pub moves_used: Option<i32>,
}

impl PathQuery {
    pub fn blitz() -> Self {
        Self {
            blitz: true,
            ..Self::default()
        }
    }

    pub fn continuing_from(from: Square, moves_used: i32) -> Self {
        Self {
            blitz: false,
            from: Some(from),
            moves_used: Some(moves_used),
        }
    }
}

/// Probabilistic pathfinder provided by the engine. Calls are synchronous and
/// side-effect free.
pub trait Pathfinder {
    fn all_paths(&self, state: &GameState, player: &PlayerState, query: &PathQuery) -> Vec<Path>;

    fn safest_path(
        &self,
        state: &GameState,
        player: &PlayerState,
        target: PathTarget,
    ) -> Option<Path>;
}
