use crate::infra::{PlayerId, Square, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDie {
    AttackerDown,
    BothDown,
    Push,
    DefenderStumbles,
    DefenderDown,
}

/// A block roll waiting for a decision.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRoll {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub blitz: bool,
    /// Number of block dice rolled
    pub dice: usize,
    /// Team choosing the result
    pub favor: TeamId,
    pub results: Vec<BlockDie>,
}

/// What a reroll prompt is about.
#[derive(Debug, Clone, PartialEq)]
pub enum RerollContext {
    Dodge,
    Pickup,
    PassAttempt,
    Catch,
    Gfi,
    BloodLust,
    Block(BlockRoll),
    Other,
}

/// Top of the engine's procedure stack: the decision point the bot is asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum Procedure {
    CoinTossFlip,
    CoinTossKickReceive,
    Setup,
    PerfectDefence,
    PlaceBall,
    HighKick,
    Touchback,
    QuickSnap,
    Blitz,
    Turn,
    PlayerAction,
    Block(BlockRoll),
    Reroll(RerollContext),
    Push(Vec<Square>),
    FollowUp(Vec<Square>),
    Apothecary,
    Interception(Vec<PlayerId>),
    Bribe,
    SkillPrompt,
    BloodLustBlockOrMove,
    EatThrall(Vec<Square>),
    EndGame,
}
