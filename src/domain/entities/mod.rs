pub mod team_member;

pub use team_member::*;
