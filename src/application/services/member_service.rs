use crate::domain::entities::{validate_stress_level, NewTeamMember, TeamMember};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::member_store::MemberStore;
use crate::domain::services::aggregation::{summarize, TeamSummary};
use std::sync::Arc;

/// Unvalidated create input as received at the boundary.
#[derive(Debug, Clone)]
pub struct CreateMemberInput {
    pub name: String,
    pub role: String,
    pub stress_level: Option<i64>,
}

#[derive(Clone)]
pub struct MemberService {
    store: Arc<dyn MemberStore>,
}

impl MemberService {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn list_members(&self) -> DomainResult<Vec<TeamMember>> {
        self.store.list_members().await
    }

    pub async fn get_member(&self, id: i64) -> DomainResult<TeamMember> {
        self.store.get_member(id).await
    }

    /// Create a new team member
    pub async fn create_member(&self, input: CreateMemberInput) -> DomainResult<TeamMember> {
        let new_member = NewTeamMember::new(&input.name, &input.role, input.stress_level)?;

        // Check uniqueness
        match self.store.get_member_by_name(&new_member.name).await {
            Ok(_) => {
                return Err(DomainError::DuplicateName(
                    "Team member with this name already exists".to_string(),
                ))
            }
            Err(DomainError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let member = self.store.create_member(&new_member).await?;

        metrics::counter!("stressboard_members_created_total").increment(1);
        tracing::info!(
            "Team member created: id={}, name={}",
            member.id,
            member.name
        );

        Ok(member)
    }

    pub async fn update_stress_level(&self, id: i64, stress_level: i64) -> DomainResult<TeamMember> {
        validate_stress_level(stress_level)?;

        let member = self.store.update_stress_level(id, stress_level).await?;

        metrics::counter!("stressboard_stress_updates_total").increment(1);
        tracing::info!(
            "Stress level updated: id={}, stress_level={}",
            member.id,
            member.stress_level
        );

        Ok(member)
    }

    /// Summary statistics over the current snapshot.
    pub async fn summary(&self) -> DomainResult<TeamSummary> {
        let members = self.store.list_members().await?;
        Ok(summarize(&members))
    }
}
