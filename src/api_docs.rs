use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::chat::chat_handler,
        api::history::list_history,
    ),
    components(
        schemas(
            api::chat::ChatRequest,
            api::chat::ChatResponse,
            api::history::HistoryEntry,
        )
    ),
    tags(
        (name = "qna-relay", description = "Prompt relay and interaction log API")
    )
)]
pub struct ApiDoc;
