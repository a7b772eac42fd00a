//! Kick-off formations for the standard 28x17 pitch.
//!
//! Templates cover one half: 15 rows for the playable width of the pitch and
//! 13 columns, where column 0 is the own end zone and column 12 lies on the
//! line of scrimmage. Slot roles:
//! - `S` strongest player
//! - `s` Sure Hands
//! - `b` Block
//! - `m` fastest player
//! - `0` fewest skills
//! - `x` anyone

use std::cmp::Reverse;

use tracing::debug;

use crate::infra::{Square, TeamId};
use crate::state::{Action, ActionKind, GameState, PlayerState, Skill};

pub const STANDARD_WIDTH: i32 = 28;
pub const STANDARD_HEIGHT: i32 = 17;

const WEDGE_OFFENSE: [&str; 15] = [
    "-------------",
    "-------------",
    "----------m--",
    "-----------x-",
    "-------------",
    "------------S",
    "------------x",
    "-----s---0--S",
    "------------x",
    "------------S",
    "-------------",
    "-----------x-",
    "----------m--",
    "-------------",
    "-------------",
];

const ZONE_DEFENSE: [&str; 15] = [
    "-------------",
    "--------x-b--",
    "-------------",
    "-------------",
    "--------x-S--",
    "------------0",
    "-------------",
    "------------0",
    "-------------",
    "------------0",
    "--------x-S--",
    "-------------",
    "--------x-b--",
    "-------------",
    "-------------",
];

/// Roles are filled in this order so the specific slots get first pick.
const FILL_ORDER: [char; 6] = ['S', 's', 'b', 'm', '0', 'x'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    WedgeOffense,
    ZoneDefense,
}

impl Formation {
    pub fn for_kickoff(receiving: bool) -> Self {
        if receiving {
            Formation::WedgeOffense
        } else {
            Formation::ZoneDefense
        }
    }

    /// True when the templates fit the pitch.
    pub fn fits(state: &GameState) -> bool {
        state.width() == STANDARD_WIDTH && state.height() == STANDARD_HEIGHT
    }

    pub fn name(&self) -> &'static str {
        match self {
            Formation::WedgeOffense => "Wedge offense",
            Formation::ZoneDefense => "Zone defense",
        }
    }

    fn template(&self) -> &'static [&'static str; 15] {
        match self {
            Formation::WedgeOffense => &WEDGE_OFFENSE,
            Formation::ZoneDefense => &ZONE_DEFENSE,
        }
    }

    /// Placement actions for `team`. Players already on the pitch are sent
    /// back to the dugout first, then every slot takes the best remaining
    /// player for its role. Slots are left empty once the squad runs out.
    pub fn actions(&self, state: &GameState, team: TeamId) -> Vec<Action> {
        let Some(target_x) = state.target_endzone_x(team) else {
            return Vec::new();
        };
        // Scoring on the left means defending the right half
        let defends_right = target_x < state.width() / 2;

        let mut actions: Vec<Action> = state
            .players_on_pitch(team)
            .map(|p| Action::with_player(ActionKind::PlacePlayer, p.id))
            .collect();
        let mut pool: Vec<&PlayerState> = state.players_of(team).collect();

        'roles: for role in FILL_ORDER {
            for (row, line) in self.template().iter().enumerate() {
                // Scrimmage side first
                for (col, cell) in line.char_indices().rev() {
                    if cell != role {
                        continue;
                    }
                    let Some(idx) = best_for_role(&pool, role) else {
                        break 'roles;
                    };
                    let player = pool.remove(idx);
                    let col = col as i32;
                    let x = if defends_right {
                        state.width() - col - 2
                    } else {
                        col + 1
                    };
                    actions.push(Action {
                        kind: ActionKind::PlacePlayer,
                        player: Some(player.id),
                        position: Some(Square::new(x, row as i32 + 1)),
                    });
                }
            }
        }

        debug!("{} for {}: {} setup actions", self.name(), team, actions.len());
        actions
    }
}

fn role_score(player: &PlayerState, role: char) -> i32 {
    match role {
        'S' => player.st,
        's' => i32::from(player.has_skill(Skill::SureHands)),
        'b' => i32::from(player.has_skill(Skill::Block)),
        'm' => player.ma,
        '0' => -(player.skills.len() as i32),
        _ => 0,
    }
}

/// Highest scoring player for `role`; ties go to the earliest in the squad.
fn best_for_role(pool: &[&PlayerState], role: char) -> Option<usize> {
    pool.iter()
        .enumerate()
        .max_by_key(|(i, p)| (role_score(p, role), Reverse(*i)))
        .map(|(i, _)| i)
}
