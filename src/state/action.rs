use crate::infra::{PlayerId, Square};

/// Every atomic action the engine accepts from this bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    // Team turn: pick a player and the kind of player action
    StartMove,
    StartBlock,
    StartBlitz,
    StartHandoff,
    StartFoul,
    EndTurn,

    // Player action steps
    Move,
    Block,
    Handoff,
    Foul,
    StandUp,
    EndPlayerTurn,

    // Block dice and rerolls
    UseReroll,
    DontUseReroll,
    SelectAttackerDown,
    SelectBothDown,
    SelectPush,
    SelectDefenderStumbles,
    SelectDefenderDown,
    Push,
    FollowUp,

    // Pre-game and kick-off
    Heads,
    Tails,
    Kick,
    Receive,
    PlacePlayer,
    SetupFormationWedge,
    SetupFormationLine,
    SetupFormationSpread,
    SetupFormationZone,
    EndSetup,
    PlaceBall,
    SelectPlayer,
    SelectNone,

    // Skill and inducement prompts
    UseSkill,
    UseApothecary,
    UseBribe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub kind: ActionKind,
    pub player: Option<PlayerId>,
    pub position: Option<Square>,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            player: None,
            position: None,
        }
    }

    pub fn with_player(kind: ActionKind, player: PlayerId) -> Self {
        Self {
            kind,
            player: Some(player),
            position: None,
        }
    }

    pub fn at(kind: ActionKind, position: Square) -> Self {
        Self {
            kind,
            player: None,
            position: Some(position),
        }
    }

    pub fn end_turn() -> Self {
        Self::new(ActionKind::EndTurn)
    }
}
