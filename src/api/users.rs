use actix_web::{web, HttpResponse, Responder};

use crate::{
    database::UserStore,
    models::UserPayload,
    services::user_service,
    utils::error::AppError,
};

/// Route table for the user resource, mounted at /users.
pub fn scope() -> actix_web::Scope {
    web::scope("/users")
        .route("", web::post().to(create_user))
        .route("", web::get().to(list_users))
        .route("/{id}", web::get().to(get_user))
        .route("/{id}", web::put().to(update_user))
        .route("/{id}", web::delete().to(delete_user))
}

/// POST /users - Creates a user, storage assigns the id
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created, body carries the new id", body = String),
        (status = 400, description = "Name or email failed validation", body = String),
        (status = 500, description = "Storage fault", body = String)
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    request: web::Json<UserPayload>,
) -> impl Responder {
    log::info!("📝 POST /users - Creating {}", request.email);

    match user_service::create_user(store.get_ref(), request.into_inner()).await {
        Ok(id) => {
            log::info!("✅ User created with id {}", id);
            HttpResponse::Created().body(format!("User created with ID: {}", id))
        }
        Err(AppError::Validation(msg)) => {
            log::warn!("⚠️ Rejected user payload: {}", msg);
            HttpResponse::BadRequest().body(msg)
        }
        Err(e) => {
            log::error!("❌ Error inserting user: {}", e);
            HttpResponse::InternalServerError().body("Error inserting user")
        }
    }
}

/// GET /users - Lists all users, storage-native order
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [crate::models::User]),
        (status = 500, description = "Storage fault", body = String)
    )
)]
pub async fn list_users(store: web::Data<dyn UserStore>) -> impl Responder {
    log::info!("📋 GET /users - Listing users");

    match user_service::list_users(store.get_ref()).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error fetching users: {}", e);
            HttpResponse::InternalServerError().body("Error fetching users")
        }
    }
}

/// GET /users/{id} - Fetches a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = crate::models::User),
        (status = 404, description = "No user with that id", body = String),
        (status = 500, description = "Storage fault", body = String)
    )
)]
pub async fn get_user(store: web::Data<dyn UserStore>, id: web::Path<u64>) -> impl Responder {
    let id = id.into_inner();

    log::info!("🔍 GET /users/{} - Fetching user", id);

    match user_service::get_user(store.get_ref(), id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ User {} not found", id);
            HttpResponse::NotFound().body("User not found")
        }
        Err(e) => {
            log::error!("❌ Error fetching user: {}", e);
            HttpResponse::InternalServerError().body("Error fetching user")
        }
    }
}

/// PUT /users/{id} - Replaces name and email; the id never changes
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = String),
        (status = 400, description = "Name or email failed validation", body = String),
        (status = 404, description = "No user with that id", body = String),
        (status = 500, description = "Storage fault", body = String)
    )
)]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    id: web::Path<u64>,
    request: web::Json<UserPayload>,
) -> impl Responder {
    let id = id.into_inner();

    log::info!("🔧 PUT /users/{} - Updating user", id);

    match user_service::update_user(store.get_ref(), id, request.into_inner()).await {
        Ok(()) => {
            log::info!("✅ User {} updated", id);
            HttpResponse::Ok().body("User updated successfully")
        }
        Err(AppError::Validation(msg)) => {
            log::warn!("⚠️ Rejected user payload: {}", msg);
            HttpResponse::BadRequest().body(msg)
        }
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ User {} not found", id);
            HttpResponse::NotFound().body("User not found")
        }
        Err(e) => {
            log::error!("❌ Error updating user: {}", e);
            HttpResponse::InternalServerError().body("Error updating user")
        }
    }
}

/// DELETE /users/{id} - Removes a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 404, description = "No user with that id", body = String),
        (status = 500, description = "Storage fault", body = String)
    )
)]
pub async fn delete_user(store: web::Data<dyn UserStore>, id: web::Path<u64>) -> impl Responder {
    let id = id.into_inner();

    log::info!("🗑️  DELETE /users/{} - Removing user", id);

    match user_service::delete_user(store.get_ref(), id).await {
        Ok(()) => {
            log::info!("✅ User {} deleted", id);
            HttpResponse::Ok().body("User deleted successfully")
        }
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ User {} not found", id);
            HttpResponse::NotFound().body("User not found")
        }
        Err(e) => {
            log::error!("❌ Error deleting user: {}", e);
            HttpResponse::InternalServerError().body("Error deleting user")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryUserStore;
    use crate::models::User;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn store_data() -> web::Data<dyn UserStore> {
        web::Data::from(Arc::new(MemoryUserStore::new()) as Arc<dyn UserStore>)
    }

    fn payload(name: &str, email: &str) -> serde_json::Value {
        serde_json::json!({ "name": name, "email": email })
    }

    fn create_request(name: &str, email: &str) -> actix_http::Request {
        test::TestRequest::post()
            .uri("/users")
            .set_json(payload(name, email))
            .to_request()
    }

    /// Pulls the assigned id out of "User created with ID: <id>".
    fn parse_id(body: &[u8]) -> u64 {
        std::str::from_utf8(body)
            .unwrap()
            .strip_prefix("User created with ID: ")
            .unwrap()
            .parse()
            .unwrap()
    }

    #[actix_web::test]
    async fn test_create_then_list_contains_new_user() {
        let app =
            test::init_service(App::new().app_data(store_data()).service(scope())).await;

        let resp = test::call_service(&app, create_request("alice jones", "alice@example.com")).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let id = parse_id(&test::read_body(resp).await);

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Vec<User> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, id);
        assert_eq!(users[0].name, "Alice Jones");
        assert_eq!(users[0].email, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_full_lifecycle() {
        let app =
            test::init_service(App::new().app_data(store_data()).service(scope())).await;

        let resp = test::call_service(&app, create_request("alice jones", "alice@example.com")).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let id = parse_id(&test::read_body(resp).await);

        // Get-one after create returns the created record
        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let user: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.name, "Alice Jones");

        // Update keeps the id and changes the fields
        let req = test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(payload("alice smith", "alice@new.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "User updated successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let user: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alice Smith");
        assert_eq!(user.email, "alice@new.com");

        // Delete, then get-one is a 404
        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "User deleted successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await, "User not found");
    }

    #[actix_web::test]
    async fn test_ids_are_monotonic() {
        let app =
            test::init_service(App::new().app_data(store_data()).service(scope())).await;

        let resp = test::call_service(&app, create_request("alice jones", "alice@example.com")).await;
        let first = parse_id(&test::read_body(resp).await);

        let resp = test::call_service(&app, create_request("bob stone", "bob@example.com")).await;
        let second = parse_id(&test::read_body(resp).await);

        assert!(second > first);
    }

    #[actix_web::test]
    async fn test_missing_id_is_not_found_not_a_fault() {
        let app =
            test::init_service(App::new().app_data(store_data()).service(scope())).await;

        let req = test::TestRequest::get().uri("/users/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/users/99")
            .set_json(payload("alice jones", "alice@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/users/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await, "User not found");
    }

    #[actix_web::test]
    async fn test_invalid_payload_is_rejected_before_storage() {
        let app =
            test::init_service(App::new().app_data(store_data()).service(scope())).await;

        let resp = test::call_service(&app, create_request("john  smith", "j@s.co")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, create_request("john smith", "a@b")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Vec<User> = test::call_and_read_body_json(&app, req).await;
        assert!(users.is_empty());
    }
}
