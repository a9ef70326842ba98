use actix_files::NamedFile;
use actix_web::{HttpResponse, Error, HttpRequest, web};
use std::path::{Component, Path, PathBuf};

pub const STATIC_DIR: &str = "static";

/// Resolves a requested asset name under `STATIC_DIR`. Anything that is not
/// a plain relative path made of normal components (absolute paths, `.`,
/// `..`, a root prefix) is rejected so a request can never escape the
/// directory.
fn sanitize(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(STATIC_DIR);
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            _ => return None,
        }
    }
    Some(path)
}

pub async fn serve_static(
    req: HttpRequest,
    filename: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let path = sanitize(&filename)
        .ok_or_else(|| actix_web::error::ErrorNotFound("asset not found"))?;

    let file = NamedFile::open(path)
        .map_err(|_| actix_web::error::ErrorNotFound("asset not found"))?;

    Ok(file.into_response(&req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    // `actix_web::test` stays out of the glob import so the plain `#[test]`
    // attribute below keeps resolving to the built-in one.
    use actix_web::{web, App};

    #[test]
    fn sanitize_accepts_plain_names() {
        assert_eq!(sanitize("map.js"), Some(PathBuf::from("static/map.js")));
        assert_eq!(
            sanitize("css/site.css"),
            Some(PathBuf::from("static/css/site.css"))
        );
    }

    #[test]
    fn sanitize_rejects_escapes() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize(".."), None);
        assert_eq!(sanitize("../Cargo.toml"), None);
        assert_eq!(sanitize("css/../../Cargo.toml"), None);
        assert_eq!(sanitize("/etc/passwd"), None);
        assert_eq!(sanitize("./map.js"), None);
    }

    async fn get_status_and_body(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = actix_web::test::init_service(
            App::new().route("/static/{filename:.*}", web::get().to(serve_static)),
        )
        .await;
        let req = actix_web::test::TestRequest::get().uri(uri).to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        (status, body.to_vec())
    }

    #[actix_web::test]
    async fn serves_asset_bytes_verbatim() {
        let (status, body) = get_status_and_body("/static/map.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, std::fs::read("static/map.js").unwrap());
    }

    #[actix_web::test]
    async fn traversal_is_not_found() {
        let (status, _) = get_status_and_body("/static/%2e%2e/Cargo.toml").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_asset_is_not_found() {
        let (status, _) = get_status_and_body("/static/no-such-file.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
