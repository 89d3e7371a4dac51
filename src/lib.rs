pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::services::{CreateMemberInput, MemberService};
pub use config::Config;
pub use domain::entities::{NewTeamMember, TeamMember};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::ports::member_store::MemberStore;
pub use domain::services::aggregation::{summarize, StressBand, TeamSummary};
