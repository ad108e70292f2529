use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD API for the user resource.\n\n**Endpoints:**\n- Create, list, fetch, update and delete users\n- Health monitoring\n\nEvery mutation expects `{name, email}`; ids are assigned by the database and never change.",
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserPayload,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints. One parameterized SQL statement per operation."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
