use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MIN_STRESS_LEVEL: i64 = 1;
pub const MAX_STRESS_LEVEL: i64 = 10;
pub const DEFAULT_STRESS_LEVEL: i64 = 5;

/// A tracked team member and their latest self-reported stress level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub stress_level: i64,
    pub last_update: DateTime<Utc>,
}

/// Validated input for creating a member. `id` and `last_update` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub stress_level: i64,
}

impl NewTeamMember {
    /// Trims `name` and `role`, applies the default stress level and
    /// validates the result.
    pub fn new(name: &str, role: &str, stress_level: Option<i64>) -> DomainResult<Self> {
        let member = Self {
            name: name.trim().to_string(),
            role: role.trim().to_string(),
            stress_level: stress_level.unwrap_or(DEFAULT_STRESS_LEVEL),
        };
        member.validate()?;
        Ok(member)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }

        if self.role.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Role cannot be empty".to_string(),
            ));
        }

        validate_stress_level(self.stress_level)?;
        Ok(())
    }
}

pub fn is_valid_stress_level(level: i64) -> bool {
    (MIN_STRESS_LEVEL..=MAX_STRESS_LEVEL).contains(&level)
}

pub fn validate_stress_level(level: i64) -> DomainResult<i64> {
    if is_valid_stress_level(level) {
        Ok(level)
    } else {
        Err(DomainError::ValidationError(format!(
            "Stress level must be between {} and {}, got {}",
            MIN_STRESS_LEVEL, MAX_STRESS_LEVEL, level
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_member_trims_and_defaults() {
        let member = NewTeamMember::new("  Ada  ", " Engineer ", None).unwrap();
        assert_eq!(member.name, "Ada");
        assert_eq!(member.role, "Engineer");
        assert_eq!(member.stress_level, DEFAULT_STRESS_LEVEL);
    }

    #[test]
    fn test_new_member_rejects_blank_fields() {
        assert!(matches!(
            NewTeamMember::new("   ", "Engineer", None),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            NewTeamMember::new("Ada", "", None),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_stress_level_bounds() {
        assert!(validate_stress_level(0).is_err());
        assert!(validate_stress_level(1).is_ok());
        assert!(validate_stress_level(10).is_ok());
        assert!(validate_stress_level(11).is_err());
        assert!(NewTeamMember::new("Ada", "Engineer", Some(11)).is_err());
    }

    #[test]
    fn test_team_member_serializes_camel_case() {
        let member = TeamMember {
            id: 1,
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
            stress_level: 5,
            last_update: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["stressLevel"], 5);
        assert_eq!(json["lastUpdate"], "2026-10-19T12:00:00Z");
        assert!(json.get("stress_level").is_none());
    }
}
