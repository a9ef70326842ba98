use minijinja::{path_loader, Environment};
use minijinja_autoreload::AutoReloader;
use once_cell::sync::Lazy;
use serde::Serialize;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};

pub const TEMPLATE_DIR: &str = "templates";

// Templates are picked up from disk on change, no restart needed.
static TEMPLATES: Lazy<AutoReloader> = Lazy::new(|| {
    AutoReloader::new(|notifier| {
        let mut env = Environment::new();
        env.set_loader(path_loader(TEMPLATE_DIR));
        notifier.watch_path(TEMPLATE_DIR, true);
        Ok(env)
    })
});

fn render<T: Serialize>(template_file: &str, ctx: T) -> Result<String, Error> {
    let env = TEMPLATES
        .acquire_env()
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let tmpl = env
        .get_template(template_file)
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    tmpl.render(ctx)
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))
}

pub fn render_page<T: Serialize>(template_file: &str, ctx: T) -> Result<HttpResponse, Error> {
    render_page_with_status(template_file, ctx, StatusCode::OK)
}

pub fn render_page_with_status<T: Serialize>(
    template_file: &str,
    ctx: T,
    status: StatusCode,
) -> Result<HttpResponse, Error> {
    let html = render(template_file, ctx)?;

    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}
