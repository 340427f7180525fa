use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Ana",
        "email": "ana@x.com",
        "role": "Designer"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ana")]
    pub name: String,

    #[schema(example = "ana@x.com")]
    pub email: String,

    /// Open set: Developer, Designer, Manager, ...
    #[schema(example = "Designer", nullable = true)]
    pub role: Option<String>,
}

/// Registration payload. `name` and `email` are optional here so that a
/// missing field reaches the store and is reported as a constraint violation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "Ana", value_type = String)]
    pub name: Option<String>,
    #[schema(example = "ana@x.com", format = "email", value_type = String)]
    pub email: Option<String>,
    #[schema(example = "Designer", nullable = true)]
    pub role: Option<String>,
}

impl NewEmployee {
    pub fn new(name: &str, email: &str, role: Option<&str>) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            role: role.map(str::to_string),
        }
    }
}
