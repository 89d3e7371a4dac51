use crate::domain::entities::{validate_stress_level, NewTeamMember, TeamMember};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::member_store::MemberStore;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Roster loaded by `InMemoryMemberStore::with_seed_roster`.
pub const SEED_ROSTER: [(&str, &str, i64); 6] = [
    ("Sarah Chen", "Product Manager", 5),
    ("Mike Johnson", "Frontend Developer", 3),
    ("Emma Smith", "UX Designer", 5),
    ("David Lee", "Backend Developer", 2),
    ("Anna Rodriguez", "QA Engineer", 4),
    ("James Brown", "DevOps Engineer", 6),
];

#[derive(Default)]
struct Members {
    // Keyed by id, so iteration order is insertion order.
    by_id: BTreeMap<i64, TeamMember>,
    ids_by_name: HashMap<String, i64>,
    next_id: i64,
}

impl Members {
    fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    fn insert(&mut self, member: &NewTeamMember, clock: &dyn Clock) -> DomainResult<TeamMember> {
        member.validate()?;

        if self.ids_by_name.contains_key(&member.name) {
            return Err(DomainError::DuplicateName(format!(
                "Team member with name '{}' already exists",
                member.name
            )));
        }

        let id = self.next_id;
        self.next_id += 1;

        let created = TeamMember {
            id,
            name: member.name.clone(),
            role: member.role.clone(),
            stress_level: member.stress_level,
            last_update: clock.now(),
        };

        self.ids_by_name.insert(created.name.clone(), id);
        self.by_id.insert(id, created.clone());
        Ok(created)
    }
}

/// Process-local member store. State is lost on restart.
pub struct InMemoryMemberStore {
    members: RwLock<Members>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMemberStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            members: RwLock::new(Members::new()),
            clock,
        }
    }

    /// Store pre-populated with `SEED_ROSTER`, ids 1 through 6.
    pub fn with_seed_roster(clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let mut members = Members::new();
        for (name, role, stress_level) in SEED_ROSTER {
            members.insert(
                &NewTeamMember {
                    name: name.to_string(),
                    role: role.to_string(),
                    stress_level,
                },
                clock.as_ref(),
            )?;
        }

        tracing::debug!("Seeded in-memory store with {} members", members.by_id.len());

        Ok(Self {
            members: RwLock::new(members),
            clock,
        })
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn list_members(&self) -> DomainResult<Vec<TeamMember>> {
        let members = self.members.read().await;
        Ok(members.by_id.values().cloned().collect())
    }

    async fn get_member(&self, id: i64) -> DomainResult<TeamMember> {
        let members = self.members.read().await;
        members
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Team member {} not found", id)))
    }

    async fn get_member_by_name(&self, name: &str) -> DomainResult<TeamMember> {
        let members = self.members.read().await;
        members
            .ids_by_name
            .get(name)
            .and_then(|id| members.by_id.get(id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Team member '{}' not found", name)))
    }

    async fn create_member(&self, member: &NewTeamMember) -> DomainResult<TeamMember> {
        let mut members = self.members.write().await;
        members.insert(member, self.clock.as_ref())
    }

    async fn update_stress_level(&self, id: i64, stress_level: i64) -> DomainResult<TeamMember> {
        validate_stress_level(stress_level)?;

        let mut members = self.members.write().await;
        let existing = members
            .by_id
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Team member {} not found", id)))?;

        existing.stress_level = stress_level;
        existing.last_update = existing.last_update.max(self.clock.now());
        Ok(existing.clone())
    }
}
