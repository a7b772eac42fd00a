use std::collections::HashMap;

use crate::infra::{PlayerId, Square};

/// Square occupancy of the pitch. Squares outside `0..width` x `0..height` are
/// out of bounds; the engine keeps a one-square border row around the playing
/// area, so the scoring columns sit at `x == 1` and `x == width - 2`.
#[derive(Clone, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    occupants: HashMap<Square, PlayerId>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            occupants: HashMap::new(),
        }
    }

    pub fn get(&self, pos: &Square) -> Option<PlayerId> {
        self.occupants.get(pos).copied()
    }

    pub fn insert(&mut self, pos: Square, player: PlayerId) -> Option<PlayerId> {
        self.occupants.insert(pos, player)
    }

    pub fn remove(&mut self, pos: &Square) -> Option<PlayerId> {
        self.occupants.remove(pos)
    }

    pub fn is_empty_at(&self, pos: &Square) -> bool {
        !self.occupants.contains_key(pos)
    }

    /// Playable area: everything except the border row.
    pub fn is_out_of_bounds(&self, pos: &Square) -> bool {
        pos.x < 1 || pos.x >= self.width - 1 || pos.y < 1 || pos.y >= self.height - 1
    }
}
