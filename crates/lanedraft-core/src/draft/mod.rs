// Draft domain: hero attributes, pick tokens, request state, team analysis.

pub mod hero;
pub mod pick;
pub mod state;
pub mod team;
