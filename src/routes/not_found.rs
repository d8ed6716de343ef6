use actix_web::{HttpRequest, HttpResponse};

use crate::errors::RouteError;

#[tracing::instrument(name = "Unmatched route", skip_all, fields(path = %req.path()))]
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, RouteError> {
    Err(RouteError::NotFound {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}
