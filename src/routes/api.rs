//! JSON API consumed by the dashboard front-end.

use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::ai::ChatModel;
use crate::dto::api::{AiQuestion, SalesRepsQueryParams};
use crate::models::config::ServerConfig;
use crate::routes::SharedRepository;
use crate::services::{ai as ai_service, sales_reps as sales_reps_service};

#[get("/data")]
/// List sales representatives with optional search, filters, and paging.
pub async fn list_data(
    params: web::Query<SalesRepsQueryParams>,
    repo: web::Data<SharedRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = params
        .into_inner()
        .into_query(server_config.default_page_size, server_config.max_page_size);

    match sales_reps_service::list_sales_reps(repo.get_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list sales reps: {err}");
            HttpResponse::InternalServerError().json(json!({"detail": "Failed to load sales data"}))
        }
    }
}

#[post("/ai")]
/// Forward a question to the chat provider. Always answers with 200.
pub async fn ask_ai(
    web::Json(request): web::Json<AiQuestion>,
    repo: web::Data<SharedRepository>,
    model: web::Data<dyn ChatModel>,
) -> impl Responder {
    let answer = ai_service::answer_question(repo.get_ref(), model.get_ref(), request).await;
    HttpResponse::Ok().json(answer)
}
