use crate::domain::entities::{NewTeamMember, TeamMember};
use crate::domain::errors::DomainResult;

/// Owner of team member state.
///
/// Implementations serialize mutations across the whole store: the name
/// check in `create_member` and the existence check in `update_stress_level`
/// happen in the same critical section as the write. Readers never observe a
/// member whose `stress_level` and `last_update` disagree.
#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    /// All members, in insertion order.
    async fn list_members(&self) -> DomainResult<Vec<TeamMember>>;

    async fn get_member(&self, id: i64) -> DomainResult<TeamMember>;

    /// Exact, case-sensitive name lookup.
    async fn get_member_by_name(&self, name: &str) -> DomainResult<TeamMember>;

    /// Fails with `DuplicateName` if a member with the same name exists.
    async fn create_member(&self, member: &NewTeamMember) -> DomainResult<TeamMember>;

    async fn update_stress_level(&self, id: i64, stress_level: i64) -> DomainResult<TeamMember>;
}
