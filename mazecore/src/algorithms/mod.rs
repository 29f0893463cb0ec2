pub mod generator;
pub mod solver;

use rand::{thread_rng, Rng as _, SeedableRng as _};

pub use generator::{MazeCarver, RecursiveBacktracker};
pub use rand::RngCore;
pub use solver::{PathFinder, Route, SearchOutcome, SearchStats};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`], drawing a fresh seed when none is given.
///
/// Returns the seed actually used, so the run can be reproduced.
pub fn seeded_random(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}
