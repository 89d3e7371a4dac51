pub mod error;

pub use error::{ApiError, ApiResult, FieldError};

use crate::application::services::MemberService;

#[derive(Clone)]
pub struct AppState {
    pub member_service: MemberService,
}
