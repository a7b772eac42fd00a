use std::collections::VecDeque;

use tracing::debug;

use crate::state::Action;

/// What the bot should do with the action queue on this call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Queued actions remain; take the next one
    Drain,
    /// Queue is empty; ask the strategy chain for a new maneuver
    Replan,
}

/// Turn bookkeeping for the scripted planner: the queued maneuver actions and
/// the turn/half they were planned in.
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    queue: VecDeque<Action>,
    last_turn: i32,
    last_half: i32,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of a new game: forget the previous turn and any plan.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.last_turn = 0;
        self.last_half = 0;
    }

    /// Record the engine's turn counter. A later turn (or a later half)
    /// discards the queued plan. Returns true when the queue was cleared.
    pub fn sync_turn(&mut self, turn: i32, half: i32) -> bool {
        let advanced = half > self.last_half || (half == self.last_half && turn > self.last_turn);
        if !advanced {
            return false;
        }

        if !self.queue.is_empty() {
            debug!(
                "Turn advanced to {} (half {}), dropping {} queued actions",
                turn,
                half,
                self.queue.len()
            );
        }
        self.queue.clear();
        self.last_turn = turn;
        self.last_half = half;
        true
    }

    pub fn last_turn(&self) -> i32 {
        self.last_turn
    }

    pub fn last_half(&self) -> i32 {
        self.last_half
    }

    pub fn phase(&self) -> Phase {
        if self.queue.is_empty() {
            Phase::Replan
        } else {
            Phase::Drain
        }
    }

    pub fn push(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    pub fn extend(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.queue.extend(actions);
    }

    /// Throw away whatever is queued and queue `actions` instead.
    pub fn replace_with(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.queue.clear();
        self.queue.extend(actions);
    }

    pub fn pop_next(&mut self) -> Option<Action> {
        self.queue.pop_front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActionKind;

    #[test]
    fn test_turn_increment_clears_queue() {
        let mut state = PlannerState::new();
        assert!(state.sync_turn(1, 1));
        state.extend([Action::new(ActionKind::Move), Action::end_turn()]);
        assert_eq!(state.phase(), Phase::Drain);

        assert!(!state.sync_turn(1, 1));
        assert_eq!(state.len(), 2);

        assert!(state.sync_turn(2, 1));
        assert!(state.is_empty());
        assert_eq!(state.phase(), Phase::Replan);
        assert_eq!(state.last_turn(), 2);
    }

    #[test]
    fn test_new_half_clears_queue_even_with_lower_turn() {
        let mut state = PlannerState::new();
        state.sync_turn(8, 1);
        state.push(Action::end_turn());
        assert!(state.sync_turn(1, 2));
        assert!(state.is_empty());
        assert_eq!(state.last_half(), 2);
    }

    #[test]
    fn test_reset_forgets_turn() {
        let mut state = PlannerState::new();
        state.sync_turn(5, 2);
        state.push(Action::end_turn());
        state.reset();
        assert!(state.is_empty());
        assert!(state.sync_turn(1, 1));
    }

    #[test]
    fn test_pop_in_order() {
        let mut state = PlannerState::new();
        state.replace_with([Action::new(ActionKind::StartMove), Action::new(ActionKind::Move)]);
        assert_eq!(state.pop_next().map(|a| a.kind), Some(ActionKind::StartMove));
        assert_eq!(state.pop_next().map(|a| a.kind), Some(ActionKind::Move));
        assert_eq!(state.pop_next(), None);
    }
}
