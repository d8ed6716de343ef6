use actix_web::{HttpResponse, http::header::ContentType, web::Data};

use super::HomePage;

// also mounted for HEAD; actix drops the body but keeps the headers
#[tracing::instrument(name = "Render home page", skip_all)]
pub async fn home(page: Data<HomePage>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.body())
}
