pub mod heuristic;
pub mod rl;
