use crate::infra::{PlayerId, TeamId};

/// Kinds of entries the engine appends to its result log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Touchdown,
    SuccessfulCatch,
    FailedCatch,
    Interception,
    SuccessfulPickup,
    FailedPickup,
    Fumble,
    KnockedDown,
    KnockedOut,
    Casualty,
    SuccessfulDodge,
    FailedDodge,
    SuccessfulGfi,
    FailedGfi,
    TurnStart,
    EndOfTurn,
    Turnover,
    Other,
}

/// One roll attached to an outcome. `chance` is only meaningful when the roll
/// had a target number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollChance {
    pub has_target: bool,
    pub chance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub team: Option<TeamId>,
    pub player: Option<PlayerId>,
    pub rolls: Vec<RollChance>,
}

impl Outcome {
    pub fn new(kind: OutcomeKind, team: TeamId) -> Self {
        Self {
            kind,
            team: Some(team),
            player: None,
            rolls: Vec::new(),
        }
    }

    pub fn with_chance(mut self, chance: f32) -> Self {
        self.rolls.push(RollChance {
            has_target: true,
            chance,
        });
        self
    }

    /// Probability the logged event had of happening: product over the
    /// targeted rolls, 1 when nothing was rolled.
    pub fn chance(&self) -> f32 {
        self.rolls
            .iter()
            .filter(|roll| roll.has_target)
            .map(|roll| roll.chance)
            .product()
    }
}
