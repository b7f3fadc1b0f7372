use utoipa::OpenApi;

#[derive(utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ElderCare API",
        description = "API for elderly care management system",
        version = "1.0.0"
    ),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::auth::signup,
        crate::routes::auth::login,
        crate::routes::requests::create,
        crate::routes::requests::pending,
        crate::routes::requests::handle_action,
    ),
    components(schemas(
        HealthResponse,
        crate::routes::MessageOutput,
        crate::routes::auth::SignupInput,
        crate::routes::auth::LoginInput,
        crate::routes::auth::LoginUser,
        crate::routes::auth::LoginOutput,
        crate::routes::requests::CreateRequestInput,
        crate::routes::requests::CreateRequestOutput,
        crate::routes::requests::ActionInput,
        crate::routes::requests::RequestOutput,
        crate::routes::requests::PendingOutput,
    )),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "requests")
    )
)]
pub struct ApiDoc;
