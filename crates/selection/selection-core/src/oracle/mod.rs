//! Built-in evaluation oracles.

mod fixture;
mod random;

pub use fixture::FixtureOracle;
pub use random::RandomOracle;
