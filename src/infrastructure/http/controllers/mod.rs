pub mod team_members;
