use actix_web::{HttpResponse, Error, web};
use minijinja::context;

use crate::config::Config;

/// Substituted into the map page when no tile API key is configured. The
/// page still renders; Thunderforest tiles come back unauthorized until the
/// server is restarted with the key set.
pub const MISSING_API_KEY: &str = "missing-api-key";

pub async fn map(config: web::Data<Config>) -> Result<HttpResponse, Error> {
    let api_key = config.api_key.as_deref().unwrap_or(MISSING_API_KEY);
    crate::templates::render_page(
        "map.html",
        context! {
            api_key,
        },
    )
}
