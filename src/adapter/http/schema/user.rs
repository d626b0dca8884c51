use serde::Deserialize;
use serde_email::Email;
use utoipa::ToSchema;
use validator::Validate;

use crate::adapter::http::schema::ValidPassword;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 6,
        max = 50,
        message = "Username must be between 6 and 50 characters"
    ))]
    pub username: String,
    #[schema(value_type = String, format = Email)]
    pub email: Email,
    #[validate(nested)]
    pub password: ValidPassword,
}
