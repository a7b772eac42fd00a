use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Board distance: number of single-square steps when diagonal moves are allowed.
    pub fn distance(&self, other: &Square) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn manhattan(&self, other: &Square) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn orthogonal(&self) -> [Square; 4] {
        [
            Square::new(self.x, self.y - 1), // Up
            Square::new(self.x + 1, self.y), // Right
            Square::new(self.x, self.y + 1), // Down
            Square::new(self.x - 1, self.y), // Left
        ]
    }

    /// All eight surrounding squares, the tackle-zone neighbourhood.
    pub fn adjacent(&self) -> [Square; 8] {
        [
            Square::new(self.x - 1, self.y - 1),
            Square::new(self.x, self.y - 1),
            Square::new(self.x + 1, self.y - 1),
            Square::new(self.x - 1, self.y),
            Square::new(self.x + 1, self.y),
            Square::new(self.x - 1, self.y + 1),
            Square::new(self.x, self.y + 1),
            Square::new(self.x + 1, self.y + 1),
        ]
    }

    /// Cage corners in fixed order: up-left, up-right, down-left, down-right.
    pub fn diagonals(&self) -> [Square; 4] {
        [
            Square::new(self.x - 1, self.y - 1),
            Square::new(self.x + 1, self.y - 1),
            Square::new(self.x - 1, self.y + 1),
            Square::new(self.x + 1, self.y + 1),
        ]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stable team identifier issued by the engine. Team objects may be rebuilt
/// between calls, the id never changes during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team#{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}
