use tracing::debug;

use crate::error::PlanError;
use crate::infra::{Path, Rules, Square};
use crate::state::{Action, ActionKind, GameState, PlayerState};

/// Turn a path into the atomic actions the engine accepts.
///
/// When the engine takes the terminal action on the destination square in one
/// go, that single action is returned. Otherwise every square becomes its own
/// step: a prone mover first stands up on their own square, intermediate squares
/// become moves, and the path's last square receives the terminal action.
///
/// With `validate` set, the destination occupant is checked against the
/// terminal action; a mismatch is a [`PlanError::InconsistentPath`].
pub fn expand_path(
    state: &GameState,
    rules: &dyn Rules,
    player: &PlayerState,
    path: &Path,
    validate: bool,
) -> Result<Vec<Action>, PlanError> {
    let Some(destination) = path.last_step() else {
        return Err(PlanError::EmptyPath(player.id));
    };
    let kind = path.terminal_kind();

    if validate {
        validate_destination(state, player, kind, destination)?;
    }

    let final_action = Action::at(kind, destination);
    if rules.is_legal(state, &final_action) {
        return Ok(vec![final_action]);
    }

    let starts_in_place = player.position == path.steps.first().copied();
    if !player.up && starts_in_place && path.steps.len() == 1 && kind == ActionKind::Move {
        // Getting up is the whole move
        return Ok(vec![Action::with_player(ActionKind::StandUp, player.id)]);
    }

    let intermediate = path.steps.len() - 1;
    let mut actions = Vec::with_capacity(path.steps.len() + 1);
    if !player.up && starts_in_place {
        actions.push(Action::with_player(ActionKind::StandUp, player.id));
        actions.extend(
            path.steps
                .iter()
                .take(intermediate)
                .skip(1)
                .map(|sq| Action::at(ActionKind::Move, *sq)),
        );
    } else {
        actions.extend(
            path.steps
                .iter()
                .take(intermediate)
                .map(|sq| Action::at(ActionKind::Move, *sq)),
        );
    }
    actions.push(final_action);

    debug!(
        "Expanded {:?} path of {} to {} into {} actions",
        kind,
        player.id,
        destination,
        actions.len()
    );
    Ok(actions)
}

fn validate_destination(
    state: &GameState,
    player: &PlayerState,
    kind: ActionKind,
    destination: Square,
) -> Result<(), PlanError> {
    let occupant = state.player_at(&destination);
    let inconsistent = |reason: &str| PlanError::InconsistentPath {
        kind,
        square: destination,
        reason: reason.to_string(),
    };

    match kind {
        ActionKind::Move => match occupant {
            Some(other) if other.id != player.id => Err(inconsistent("square is occupied")),
            _ => Ok(()),
        },
        ActionKind::Block => match occupant {
            Some(target) if target.team != player.team && target.up => Ok(()),
            Some(_) => Err(inconsistent("target is not a standing opponent")),
            None => Err(inconsistent("no player to block")),
        },
        ActionKind::Foul => match occupant {
            Some(target) if target.team != player.team && !target.up => Ok(()),
            Some(_) => Err(inconsistent("target is not a prone opponent")),
            None => Err(inconsistent("no player to foul")),
        },
        ActionKind::Handoff => match occupant {
            Some(target) if target.team == player.team && target.up => Ok(()),
            Some(_) => Err(inconsistent("receiver is not a standing teammate")),
            None => Err(inconsistent("no player to hand off to")),
        },
        _ => Err(inconsistent("not a path action")),
    }
}
