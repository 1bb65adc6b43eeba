pub mod api;
pub mod attack;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod scorer;
pub mod text;
// cmd and reports are binary modules (see main.rs).

pub use attack::{brute_force, frequency_attack, ranked_candidates, Candidate, ScoredCandidate};
pub use cipher::{decode, encode};
