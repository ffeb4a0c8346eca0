use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use shelfmatch_core::{CategorySelector, Error, Page, Product, SearchFilter, DEFAULT_PER_PAGE};
use shelfmatch_similarity::Recommender;
use shelfmatch_storage::CatalogStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Budget used when a request does not set one
pub const DEFAULT_MAX_BUDGET: f64 = 500.0;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub default_max_budget: f64,
    pub per_page: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            default_max_budget: DEFAULT_MAX_BUDGET,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Deserialize)]
struct SearchQuery {
    category: Option<String>,
    max_budget: Option<f64>,
    q: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

#[derive(Deserialize)]
struct RecommendQuery {
    category: Option<String>,
    max_budget: Option<f64>,
}

#[derive(Serialize)]
struct RecommendResponse<'a> {
    selected: &'a Product,
    category: &'a str,
    max_budget: f64,
    result: Vec<shelfmatch_similarity::RecommendationResult<'a>>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<CatalogStore>, config: ApiConfig) -> std::io::Result<()> {
        let port = config.port;
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(Self::routes(store.clone(), config.clone()))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register state and routes on an app
    pub fn routes(
        store: Arc<CatalogStore>,
        config: ApiConfig,
    ) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(store))
                .app_data(web::Data::new(config))
                .route("/health", web::get().to(health))
                .route("/categories", web::get().to(list_categories))
                .route("/products", web::get().to(search_products))
                .route("/products/{name}", web::get().to(get_product))
                .route(
                    "/products/{name}/recommendations",
                    web::get().to(recommend_products),
                )
                .route("/catalog/reload", web::post().to(reload_catalog));
        }
    }
}

fn error_response(status: actix_web::http::StatusCode, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": message.to_string()
    }))
}

async fn health(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "products": store.snapshot().len(),
    })))
}

async fn list_categories(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    let catalog = store.snapshot();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": catalog.categories()
    })))
}

async fn search_products(
    store: web::Data<Arc<CatalogStore>>,
    config: web::Data<ApiConfig>,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    let max_budget = query.max_budget.unwrap_or(config.default_max_budget);
    if max_budget.is_nan() || max_budget < 0.0 {
        return Ok(error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            format!("Invalid budget: {}", max_budget),
        ));
    }

    let category = match CategorySelector::parse(query.category.as_deref()) {
        CategorySelector::Any => None,
        CategorySelector::Named(c) => Some(c),
    };

    let catalog = store.snapshot();
    let filter = SearchFilter::new(category, max_budget, query.q);
    let matches = filter.apply(&catalog);
    let page = Page::paginate(
        matches,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(config.per_page),
    );

    Ok(HttpResponse::Ok().json(page))
}

async fn get_product(
    store: web::Data<Arc<CatalogStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    let catalog = store.snapshot();

    match catalog.get(&name) {
        Some(product) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": product
        }))),
        None => Ok(error_response(
            actix_web::http::StatusCode::NOT_FOUND,
            Error::ProductNotFound(name),
        )),
    }
}

async fn recommend_products(
    store: web::Data<Arc<CatalogStore>>,
    config: web::Data<ApiConfig>,
    path: web::Path<String>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    let catalog = store.snapshot();

    let selected = match catalog.get(&name) {
        Some(p) => p,
        None => {
            return Ok(error_response(
                actix_web::http::StatusCode::NOT_FOUND,
                Error::ProductNotFound(name),
            ));
        }
    };

    let selector = CategorySelector::parse(query.category.as_deref());
    let max_budget = query.max_budget.unwrap_or(config.default_max_budget);

    match Recommender::new(&catalog).recommend(selected, &selector, max_budget) {
        Ok(result) => {
            if result.is_empty() {
                info!(product = %name, "no recommendations matched");
            }
            Ok(HttpResponse::Ok().json(RecommendResponse {
                selected,
                category: selector.resolve(selected),
                max_budget,
                result,
            }))
        }
        Err(e) => Ok(error_response(actix_web::http::StatusCode::BAD_REQUEST, e)),
    }
}

async fn reload_catalog(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    match store.reload() {
        Ok(true) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true,
            "products": store.snapshot().len(),
        }))),
        Ok(false) => Ok(error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Catalog has no backing file",
        )),
        Err(e) => {
            warn!(error = %e, "catalog reload failed");
            Ok(error_response(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use shelfmatch_core::Catalog;

    fn store() -> Arc<CatalogStore> {
        let catalog = Catalog::new(vec![
            Product::new("Wireless Earbuds", "Bluetooth earbuds", "Electronics", 79.0, 4.3).unwrap(),
            Product::new("Bluetooth Speaker", "Portable bluetooth speaker", "Electronics", 59.0, 4.1).unwrap(),
            Product::new("Cast Iron Pan", "Pre-seasoned skillet", "Kitchen", 35.0, 4.7).unwrap(),
            Product::new("Chef Knife", "Stainless steel knife", "Kitchen", 45.0, 4.5).unwrap(),
        ])
        .unwrap();
        Arc::new(CatalogStore::new(catalog))
    }

    macro_rules! app {
        () => {
            test::init_service(App::new().configure(RestApi::routes(store(), ApiConfig::default()))).await
        };
    }

    #[actix_web::test]
    async fn test_categories() {
        let app = app!();
        let req = test::TestRequest::get().uri("/categories").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"], serde_json::json!(["Electronics", "Kitchen"]));
    }

    #[actix_web::test]
    async fn test_search_paginated() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/products?category=All&max_budget=60&per_page=2")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_items"], 3);
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["items"][0]["name"], "Bluetooth Speaker");
        assert_eq!(body["has_next"], true);
    }

    #[actix_web::test]
    async fn test_search_text() {
        let app = app!();
        let req = test::TestRequest::get().uri("/products?q=KNIFE").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_items"], 1);
        assert_eq!(body["items"][0]["name"], "Chef Knife");
    }

    #[actix_web::test]
    async fn test_recommendations() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/products/Cast%20Iron%20Pan/recommendations?max_budget=100")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["category"], "Kitchen");
        assert_eq!(body["result"].as_array().unwrap().len(), 1);
        assert_eq!(body["result"][0]["product"]["name"], "Chef Knife");
        assert!(body["result"][0]["combined_score"].as_f64().unwrap() > 0.0);
    }

    #[actix_web::test]
    async fn test_unknown_product() {
        let app = app!();
        let req = test::TestRequest::get().uri("/products/Nope/recommendations").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_negative_budget_rejected() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/products/Chef%20Knife/recommendations?max_budget=-5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_reload_without_file() {
        let app = app!();
        let req = test::TestRequest::post().uri("/catalog/reload").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
