use crate::{
    application::services::CreateMemberInput,
    domain::entities::{is_valid_stress_level, TeamMember, MAX_STRESS_LEVEL, MIN_STRESS_LEVEL},
    domain::services::aggregation::TeamSummary,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState, FieldError},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Body of `POST /api/team-members`, checked field by field so each error
/// names the offending field.
#[derive(Debug)]
pub struct CreateTeamMemberRequest {
    body: Value,
}

impl CreateTeamMemberRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    fn into_input(self) -> ApiResult<CreateMemberInput> {
        let message = "Invalid data";
        require_object(&self.body, message)?;

        let name = read_string(&self.body, "name");
        let role = read_string(&self.body, "role");
        let stress_level = read_stress_level(&self.body);

        match (name, role, stress_level) {
            (Ok(name), Ok(role), Ok(stress_level)) => Ok(CreateMemberInput {
                name,
                role,
                stress_level,
            }),
            (name, role, stress_level) => Err(ApiError::Validation {
                message: message.to_string(),
                errors: [name.err(), role.err(), stress_level.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            }),
        }
    }
}

/// Body of `PATCH /api/team-members/:id/stress`.
#[derive(Debug)]
pub struct UpdateStressLevelRequest {
    body: Value,
}

impl UpdateStressLevelRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    fn into_level(self) -> ApiResult<i64> {
        let message = "Invalid stress level";
        require_object(&self.body, message)?;

        let error = match read_stress_level(&self.body) {
            Ok(Some(level)) => return Ok(level),
            Ok(None) => FieldError::new("stressLevel", "Required"),
            Err(error) => error,
        };

        Err(ApiError::Validation {
            message: message.to_string(),
            errors: vec![error],
        })
    }
}

fn require_object(body: &Value, message: &str) -> ApiResult<()> {
    if body.is_object() {
        Ok(())
    } else {
        Err(ApiError::Validation {
            message: message.to_string(),
            errors: vec![FieldError::new("body", "Expected a JSON object")],
        })
    }
}

fn read_string(body: &Value, field: &str) -> Result<String, FieldError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(FieldError::new(field, "Required")),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(FieldError::new(field, "Expected a string")),
    }
}

// Absent or null means "not provided"; anything else must be an in-range integer.
fn read_stress_level(body: &Value) -> Result<Option<i64>, FieldError> {
    let value = match body.get("stressLevel") {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    match value.as_i64() {
        Some(level) if is_valid_stress_level(level) => Ok(Some(level)),
        Some(_) => Err(stress_level_range_error()),
        None if value.is_number() => Err(FieldError::new("stressLevel", "Expected an integer")),
        None => Err(FieldError::new("stressLevel", "Expected a number")),
    }
}

fn stress_level_range_error() -> FieldError {
    FieldError::new(
        "stressLevel",
        format!(
            "Must be an integer between {} and {}",
            MIN_STRESS_LEVEL, MAX_STRESS_LEVEL
        ),
    )
}

fn parse_member_id(raw: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid member ID".to_string()))
}

// GET /api/team-members - List all team members
pub async fn list_team_members(State(state): State<AppState>) -> ApiResult<Json<Vec<TeamMember>>> {
    let members = state.member_service.list_members().await?;
    Ok(Json(members))
}

// GET /api/team-members/:id - Get a team member by ID
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TeamMember>> {
    let id = parse_member_id(&id)?;
    let member = state.member_service.get_member(id).await?;

    Ok(Json(member))
}

// POST /api/team-members - Create a new team member
pub async fn create_team_member(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let Json(body) = payload?;
    let input = CreateTeamMemberRequest::new(body).into_input()?;

    let member = state.member_service.create_member(input).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

// PATCH /api/team-members/:id/stress - Update a member's stress level
pub async fn update_stress_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<TeamMember>> {
    let id = parse_member_id(&id)?;
    let Json(body) =
        payload.map_err(|rejection| ApiError::invalid_body("Invalid stress level", rejection))?;
    let stress_level = UpdateStressLevelRequest::new(body).into_level()?;

    let member = state
        .member_service
        .update_stress_level(id, stress_level)
        .await?;

    Ok(Json(member))
}

// GET /api/team-summary - Aggregate stress statistics
pub async fn get_team_summary(State(state): State<AppState>) -> ApiResult<Json<TeamSummary>> {
    let summary = state.member_service.summary().await?;
    Ok(Json(summary))
}
