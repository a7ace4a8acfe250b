use actix_cors::Cors;
use actix_web::{error, web, App, HttpResponse, HttpServer, Result as ActixResult};
use kuliner_core::{Error, Recommendation, DEFAULT_RECOMMENDATIONS};
use kuliner_storage::Availability;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const WELCOME: &str = "Hello! Welcome to Kuliner Palembang Recommendation API";
const MODELS_NOT_LOADED: &str = "Models not loaded. Please check server logs.";

#[derive(Deserialize)]
struct RecommendationRequest {
    kuliner: String,
    #[serde(default = "default_num_recommendations")]
    num_recommendations: usize,
}

fn default_num_recommendations() -> usize {
    DEFAULT_RECOMMENDATIONS
}

#[derive(Serialize)]
struct RecommendationResponse {
    kuliner_input: String,
    recommendations: Vec<Recommendation>,
}

/// Service A: top-N similar items over the precomputed similarity matrix.
pub struct RecommendApi;

impl RecommendApi {
    pub async fn start(availability: Availability, host: String, port: u16) -> std::io::Result<()> {
        let availability = web::Data::new(availability);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(availability.clone())
                .configure(Self::routes)
        })
        .bind((host.as_str(), port))?
        .run()
        .await
    }

    /// Routes and extractor config; the app must also carry
    /// `web::Data<Availability>`.
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(json_config())
            .route("/", web::get().to(root))
            .route("/recommend", web::post().to(recommend));
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = crate::unprocessable(err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

async fn root() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": WELCOME
    })))
}

async fn recommend(
    availability: web::Data<Availability>,
    req: web::Json<RecommendationRequest>,
) -> ActixResult<HttpResponse> {
    let catalog = match availability.catalog() {
        Ok(catalog) => catalog,
        Err(reason) => {
            warn!("Rejecting recommendation request, models unavailable: {}", reason);
            return Ok(HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "detail": MODELS_NOT_LOADED
            })));
        }
    };

    let RecommendationRequest {
        kuliner,
        num_recommendations,
    } = req.into_inner();

    match catalog.recommend(&kuliner, num_recommendations) {
        Ok(recommendations) => {
            debug!("Recommended {} items for '{}'", recommendations.len(), kuliner);
            Ok(HttpResponse::Ok().json(RecommendationResponse {
                kuliner_input: kuliner,
                recommendations,
            }))
        }
        Err(Error::ItemNotFound(name)) => {
            debug!("Unknown kuliner '{}'", name);
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "detail": format!("Kuliner dengan nama '{}' tidak ditemukan dalam dataset.", name)
            })))
        }
        Err(e) => Ok(crate::unprocessable(e.to_string())),
    }
}
