use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Error, HttpRequest};
use minijinja::context;

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    crate::templates::render_page_with_status(
        "404.html",
        context! {
            path => req.path(),
        },
        StatusCode::NOT_FOUND,
    )
}
