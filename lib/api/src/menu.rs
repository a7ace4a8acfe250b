use actix_cors::Cors;
use actix_web::{error, web, App, HttpResponse, HttpServer, Result as ActixResult};
use kuliner_core::{MenuCatalog, MenuMatch};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const WELCOME: &str = "API Menu Recommender aktif";
const NOT_FOUND_NOTE: &str = "Coba periksa penulisan menu atau gunakan nama lain";

#[derive(Deserialize)]
struct MenuQuery {
    menu_name: String,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
enum MenuResponse {
    Found {
        menu_found: String,
    },
    Suggested {
        menu_not_found: String,
        suggested_menu: String,
        similarity_score: u8,
    },
    NotFound {
        error: String,
        note: String,
    },
}

impl MenuResponse {
    fn new(query: String, resolved: MenuMatch) -> Self {
        match resolved {
            MenuMatch::Found { menu } => MenuResponse::Found { menu_found: menu },
            MenuMatch::Suggested { menu, score } => MenuResponse::Suggested {
                menu_not_found: query,
                suggested_menu: menu,
                similarity_score: score,
            },
            MenuMatch::NotFound => MenuResponse::NotFound {
                error: format!("Menu '{}' tidak ditemukan dalam dataset", query),
                note: NOT_FOUND_NOTE.to_string(),
            },
        }
    }
}

/// Service B: exact-then-fuzzy menu name resolution.
pub struct MenuApi;

impl MenuApi {
    pub async fn start(menu: Arc<MenuCatalog>, host: String, port: u16) -> std::io::Result<()> {
        let menu = web::Data::from(menu);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(menu.clone())
                .configure(Self::routes)
        })
        .bind((host.as_str(), port))?
        .run()
        .await
    }

    /// Routes and extractor config; the app must also carry
    /// `web::Data<MenuCatalog>`.
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(query_config())
            .route("/", web::get().to(root))
            .route("/recommend", web::get().to(resolve_menu));
    }
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = crate::unprocessable(err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

async fn root() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": WELCOME
    })))
}

async fn resolve_menu(
    menu: web::Data<MenuCatalog>,
    query: web::Query<MenuQuery>,
) -> ActixResult<HttpResponse> {
    let menu_name = query.into_inner().menu_name;
    let resolved = menu.resolve(&menu_name);
    debug!("Resolved menu '{}' as {:?}", menu_name, resolved);

    Ok(HttpResponse::Ok().json(MenuResponse::new(menu_name, resolved)))
}
