use crate::domain::entities::{validate_stress_level, NewTeamMember, TeamMember};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::member_store::MemberStore;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{any::AnyRow, Row};

// Fixed-width RFC 3339 so that text comparison in SQL matches time order.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| DomainError::Internal(format!("Invalid stored timestamp '{}': {}", value, e)))
}

fn member_from_row(row: &AnyRow) -> DomainResult<TeamMember> {
    let last_update: String = row.try_get("last_update")?;
    Ok(TeamMember {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        role: row.try_get("role")?,
        stress_level: row.try_get("stress_level")?,
        last_update: parse_timestamp(&last_update)?,
    })
}

#[async_trait]
impl MemberStore for Database {
    async fn list_members(&self) -> DomainResult<Vec<TeamMember>> {
        let rows = sqlx::query(
            "SELECT id, name, role, stress_level, last_update
             FROM team_members
             ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(member_from_row).collect()
    }

    async fn get_member(&self, id: i64) -> DomainResult<TeamMember> {
        let row = sqlx::query(
            "SELECT id, name, role, stress_level, last_update
             FROM team_members
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => member_from_row(&row),
            None => Err(DomainError::NotFound(format!("Team member {} not found", id))),
        }
    }

    async fn get_member_by_name(&self, name: &str) -> DomainResult<TeamMember> {
        let row = sqlx::query(
            "SELECT id, name, role, stress_level, last_update
             FROM team_members
             WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => member_from_row(&row),
            None => Err(DomainError::NotFound(format!(
                "Team member '{}' not found",
                name
            ))),
        }
    }

    async fn create_member(&self, member: &NewTeamMember) -> DomainResult<TeamMember> {
        member.validate()?;

        // A single INSERT is atomic; the UNIQUE constraint on name turns a
        // duplicate, including one from a concurrent writer, into DuplicateName.
        let row = sqlx::query(
            "INSERT INTO team_members (name, role, stress_level, last_update)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, role, stress_level, last_update",
        )
        .bind(member.name.as_str())
        .bind(member.role.as_str())
        .bind(member.stress_level)
        .bind(format_timestamp(&self.clock.now()))
        .fetch_one(&self.pool)
        .await?;

        let created = member_from_row(&row)?;
        Ok(created)
    }

    async fn update_stress_level(&self, id: i64, stress_level: i64) -> DomainResult<TeamMember> {
        validate_stress_level(stress_level)?;

        let row = sqlx::query(
            "UPDATE team_members
             SET stress_level = ?, last_update = MAX(last_update, ?)
             WHERE id = ?
             RETURNING id, name, role, stress_level, last_update",
        )
        .bind(stress_level)
        .bind(format_timestamp(&self.clock.now()))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => member_from_row(&row),
            None => Err(DomainError::NotFound(format!("Team member {} not found", id))),
        }
    }
}
