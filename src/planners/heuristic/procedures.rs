//! Answers for the decision points outside the team turn: kick-off, block
//! dice, rerolls, pushes and the various skill prompts.

use tracing::debug;

use crate::error::PlanError;
use crate::infra::{PlayerId, Square, TeamId};
use crate::state::{Action, ActionKind, BlockDie, BlockRoll, GameState, RerollContext, Skill};

pub fn coin_toss_flip() -> Action {
    Action::new(ActionKind::Tails)
}

pub fn coin_toss_kick_receive() -> Action {
    Action::new(ActionKind::Receive)
}

/// First offered kind other than ending setup or placing a single player,
/// which the caller follows with end-setup.
pub fn setup_choice(state: &GameState) -> Option<ActionKind> {
    state
        .available
        .iter()
        .copied()
        .find(|kind| !matches!(kind, ActionKind::EndSetup | ActionKind::PlacePlayer))
}

/// Kick to the middle of the opponent's half.
pub fn place_ball(state: &GameState, opp: TeamId) -> Action {
    let from_side = (state.width() + 3) / 4;
    let row = state.height() / 2;
    let left = Square::new(from_side, row);
    let right = Square::new(state.width() - 1 - from_side, row);
    let target = if state.is_team_side(&left, opp) { left } else { right };
    Action::at(ActionKind::PlaceBall, target)
}

/// A high kick landing in our half on a free square is met by the first
/// unmarked standing Block player.
pub fn high_kick(state: &GameState, team: TeamId) -> Action {
    let Some(ball_pos) = state.ball_position() else {
        return Action::new(ActionKind::SelectNone);
    };
    if !state.is_team_side(&ball_pos, team) || state.player_at(&ball_pos).is_some() {
        return Action::new(ActionKind::SelectNone);
    }

    state
        .players_on_pitch(team)
        .find(|p| p.up && p.has_skill(Skill::Block) && state.tackle_zones_in(p) == 0)
        .map(|p| Action {
            kind: ActionKind::SelectPlayer,
            player: Some(p.id),
            position: Some(ball_pos),
        })
        .unwrap_or_else(|| Action::new(ActionKind::SelectNone))
}

/// Ball goes to the first standing Block player, else the last standing one.
pub fn touchback(state: &GameState, team: TeamId) -> Action {
    let mut chosen: Option<PlayerId> = None;
    for player in state.players_on_pitch(team).filter(|p| p.up) {
        chosen = Some(player.id);
        if player.has_skill(Skill::Block) {
            break;
        }
    }
    match chosen {
        Some(id) => Action::with_player(ActionKind::SelectPlayer, id),
        None => Action::new(ActionKind::SelectNone),
    }
}

/// Pick a block die from the ones the engine offers.
pub fn block_choice(state: &GameState, roll: &BlockRoll) -> Result<Action, PlanError> {
    let attacker = state
        .player(roll.attacker)
        .ok_or(PlanError::UnknownPlayer(roll.attacker))?;
    let defender = state
        .player(roll.defender)
        .ok_or(PlanError::UnknownPlayer(roll.defender))?;
    let offered = |kind: ActionKind| state.available.contains(&kind);
    let defender_carries = state.is_ball_carrier(defender.id);

    let kind = if offered(ActionKind::SelectDefenderDown) {
        ActionKind::SelectDefenderDown
    } else if offered(ActionKind::SelectDefenderStumbles)
        && !(defender.has_skill(Skill::Dodge) && !attacker.has_skill(Skill::Tackle))
    {
        ActionKind::SelectDefenderStumbles
    } else if offered(ActionKind::SelectBothDown)
        && !defender.has_skill(Skill::Block)
        && (attacker.has_skill(Skill::Block) || defender_carries)
    {
        ActionKind::SelectBothDown
    } else if offered(ActionKind::UseReroll) && defender_carries {
        ActionKind::UseReroll
    } else if offered(ActionKind::SelectPush) {
        ActionKind::SelectPush
    } else if offered(ActionKind::UseReroll) && roll.dice > 1 {
        ActionKind::UseReroll
    } else if offered(ActionKind::SelectAttackerDown) {
        ActionKind::SelectAttackerDown
    } else {
        ActionKind::EndTurn
    };

    debug!("Block {} on {}: {:?}", attacker.id, defender.id, kind);
    Ok(Action::new(kind))
}

/// Team reroll decision. Failed dodges, pickups, passes, catches, rushes and
/// blood lust rolls are always rerolled; blocks only when the dice went badly.
pub fn reroll_choice(
    state: &GameState,
    team: TeamId,
    opp: TeamId,
    context: &RerollContext,
) -> Action {
    let reroll = match context {
        RerollContext::Dodge
        | RerollContext::Pickup
        | RerollContext::PassAttempt
        | RerollContext::Catch
        | RerollContext::Gfi
        | RerollContext::BloodLust => true,
        RerollContext::Block(roll) => should_reroll_block(state, team, opp, roll),
        RerollContext::Other => false,
    };

    if reroll {
        Action::new(ActionKind::UseReroll)
    } else {
        Action::new(ActionKind::DontUseReroll)
    }
}

fn should_reroll_block(state: &GameState, team: TeamId, opp: TeamId, roll: &BlockRoll) -> bool {
    let protected = state
        .player(roll.attacker)
        .is_some_and(|a| a.has_skill(Skill::Block) || a.has_skill(Skill::Wrestle));
    let attacker_down = roll
        .results
        .iter()
        .filter(|die| match die {
            BlockDie::AttackerDown => true,
            BlockDie::BothDown => !protected,
            _ => false,
        })
        .count();

    (attacker_down > 0 && roll.favor != team)
        || (attacker_down == roll.results.len() && roll.favor != opp)
}

pub fn push(squares: &[Square]) -> Option<Action> {
    squares.first().map(|sq| Action::at(ActionKind::Push, *sq))
}

/// Follow up onto any offered square other than where the blocker stands.
pub fn follow_up(state: &GameState, squares: &[Square]) -> Option<Action> {
    let current = state
        .active_player
        .and_then(|id| state.player(id))
        .and_then(|p| p.position);
    squares
        .iter()
        .find(|sq| Some(**sq) != current)
        .map(|sq| Action::at(ActionKind::FollowUp, *sq))
}

pub fn interception(candidates: &[PlayerId]) -> Action {
    match candidates.first() {
        Some(id) => Action::with_player(ActionKind::SelectPlayer, *id),
        None => Action::new(ActionKind::SelectNone),
    }
}

pub fn eat_thrall(squares: &[Square]) -> Option<Action> {
    squares
        .first()
        .map(|sq| Action::at(ActionKind::SelectPlayer, *sq))
}
