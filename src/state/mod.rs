mod action;
mod board;
mod game_state;
mod outcome;
mod player_state;
mod procedure;

pub use action::{Action, ActionKind};
pub use board::Board;
pub use game_state::{BallState, GameState, TeamState};
pub use outcome::{Outcome, OutcomeKind, RollChance};
pub use player_state::{PlayerState, Skill};
pub use procedure::{BlockDie, BlockRoll, Procedure, RerollContext};
