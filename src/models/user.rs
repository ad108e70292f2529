use serde::{Deserialize, Serialize};

/// Row in the `users` table. `id` is assigned by AUTO_INCREMENT and never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow, utoipa::ToSchema)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Body of POST /users and PUT /users/{id}
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}
