use actix_web::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ContentType};
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing::{error, info};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::search::ProductSearch;

const INDEX_HTML: &str = include_str!("../static/index.html");
const MAIN_JS: &str = include_str!("../static/main.js");
const ROUTE_PLACEHOLDER: &str = "__SCRAPE_ROUTE__";

pub struct AppState {
    pub search: ProductSearch,
    pub route_path: String,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            search: ProductSearch::new(&config.search_base_url)?,
            route_path: config.route_path.clone(),
        })
    }
}

// Read as raw pairs so a repeated `keyword` is not a deserialize error.
fn keyword_param(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(name, _)| name == "keyword")
        .map(|(_, value)| value)
        .filter(|k| !k.is_empty())
}

async fn scrape(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ScrapeError> {
    let keyword = keyword_param(query.into_inner()).ok_or(ScrapeError::Validation)?;

    match state.search.search(&keyword).await {
        Ok(products) => {
            info!(%keyword, count = products.len(), "scraping succeeded");
            Ok(HttpResponse::Ok().json(products))
        }
        Err(e) => {
            error!(%keyword, error = %e, "scraping failed");
            Err(e.into())
        }
    }
}

async fn index(state: web::Data<AppState>) -> HttpResponse {
    let route = state.route_path.replace('"', "&quot;");
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML.replace(ROUTE_PLACEHOLDER, &route))
}

async fn main_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/javascript; charset=utf-8")
        .body(MAIN_JS)
}

pub fn configure(cfg: &mut web::ServiceConfig, route_path: &str) {
    cfg.service(web::resource(route_path).route(web::get().to(scrape)))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/main.js").route(web::get().to(main_js)));
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = web::Data::new(AppState::new(&config)?);
    let route_path = config.route_path.clone();

    let server = HttpServer::new(move || {
        let route_path = route_path.clone();
        App::new()
            .app_data(state.clone())
            .wrap(DefaultHeaders::new().add((ACCESS_CONTROL_ALLOW_ORIGIN, "*")))
            .wrap(Logger::default())
            .configure(move |cfg| configure(cfg, &route_path))
    })
    .bind(config.bind_addr())?;

    info!(
        "Server running on http://{}:{} (route {})",
        config.host, config.port, config.route_path
    );
    server.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use mockito::{Matcher, Server};
    use serde_json::{Value, json};

    fn state_for(base_url: String) -> web::Data<AppState> {
        let config = Config {
            search_base_url: base_url,
            ..Config::default()
        };
        web::Data::new(AppState::new(&config).unwrap())
    }

    #[actix_web::test]
    async fn missing_keyword_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state_for("http://127.0.0.1:9/s?k=".into()))
                .configure(|cfg| configure(cfg, "/api/scrape")),
        )
        .await;

        for uri in ["/api/scrape", "/api/scrape?keyword="] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Keyword is required" }));
        }
    }

    #[actix_web::test]
    async fn upstream_failure_is_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/s")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(state_for(format!("{}/s?k=", server.url())))
                .configure(|cfg| configure(cfg, "/api/scrape")),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/scrape?keyword=laptop")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to scrape Amazon products");
        assert!(body["details"].as_str().unwrap().contains("503"));
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn repeated_keyword_uses_first() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/s")
            .match_query(Matcher::UrlEncoded("k".into(), "a".into()))
            .with_status(200)
            .with_body("<html><body></body></html>")
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(state_for(format!("{}/s?k=", server.url())))
                .configure(|cfg| configure(cfg, "/api/scrape")),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/scrape?keyword=a&keyword=b")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
        mock.assert_async().await;
    }

    #[::core::prelude::v1::test]
    fn keyword_param_skips_other_pairs() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("keyword".to_string(), "desk lamp".to_string()),
        ];
        assert_eq!(keyword_param(pairs).as_deref(), Some("desk lamp"));
        assert_eq!(keyword_param(vec![("keyword".into(), String::new())]), None);
        assert_eq!(keyword_param(Vec::new()), None);
    }

    #[actix_web::test]
    async fn index_points_at_route() {
        let app = test::init_service(
            App::new()
                .app_data(state_for("http://127.0.0.1:9/s?k=".into()))
                .configure(|cfg| configure(cfg, "/custom/search")),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"data-api="/custom/search""#));
        assert!(!html.contains(ROUTE_PLACEHOLDER));

        let req = test::TestRequest::get().uri("/main.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
