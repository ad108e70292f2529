// ==================== USER MANAGEMENT ====================
// CRUD over the users table. Each operation maps to exactly one
// parameterized statement through the UserStore seam. Name and email
// are validated here before any write reaches storage.

use crate::{
    database::UserStore,
    models::{User, UserPayload},
    utils::error::AppError,
    utils::validation,
};

/// Validates a payload and returns it with the name normalized to title case.
fn validate_payload(request: &UserPayload) -> Result<UserPayload, AppError> {
    if !validation::is_valid_name(&request.name) {
        return Err(AppError::Validation(
            "Name must be one or more words containing only letters, separated by single spaces"
                .to_string(),
        ));
    }
    if !validation::is_valid_email(&request.email) {
        return Err(AppError::Validation(
            "Email must look like local@domain with a dot in the domain".to_string(),
        ));
    }

    Ok(UserPayload {
        name: validation::to_title_case(&request.name),
        email: request.email.clone(),
    })
}

/// Creates a user; storage assigns the id.
pub async fn create_user(store: &dyn UserStore, request: UserPayload) -> Result<u64, AppError> {
    let user = validate_payload(&request)?;

    log::info!("📝 Creating user {}", user.email);

    store.insert(&user.name, &user.email).await
}

/// All users, storage-native order.
pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
    store.list().await
}

pub async fn get_user(store: &dyn UserStore, id: u64) -> Result<User, AppError> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
}

/// Replaces name and email of an existing user; the id never changes.
pub async fn update_user(
    store: &dyn UserStore,
    id: u64,
    request: UserPayload,
) -> Result<(), AppError> {
    let user = validate_payload(&request)?;

    log::info!("🔧 Updating user {}", id);

    if store.update(id, &user.name, &user.email).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("user {}", id)))
    }
}

pub async fn delete_user(store: &dyn UserStore, id: u64) -> Result<(), AppError> {
    log::info!("🗑️  Deleting user {}", id);

    if store.delete(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("user {}", id)))
    }
}
