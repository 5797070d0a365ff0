use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use dialect_translator::{Dictionaries, Direction, Translator, load_dictionaries_from_dir};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const ADDR_VAR: &str = "DIALECT_TRANSLATOR_ADDR";
const DICTIONARIES_VAR: &str = "DIALECT_TRANSLATOR_DICTIONARIES";

#[derive(Serialize, Deserialize, Default)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub locale: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct TranslateResponse {
    pub text: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request validation failures, checked in this order before any translation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    MissingField,
    EmptyText,
    InvalidLocale,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::MissingField => write!(f, "Required field(s) missing"),
            RequestError::EmptyText => write!(f, "No text to translate"),
            RequestError::InvalidLocale => write!(f, "Invalid value for locale field"),
        }
    }
}

impl std::error::Error for RequestError {}

// Errors travel in the body with a 200 status; clients only inspect the JSON
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind, `DIALECT_TRANSLATOR_ADDR`
    pub addr: String,
    /// Directory with replacement dictionaries, `DIALECT_TRANSLATOR_DICTIONARIES`
    pub dictionaries: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        ServerConfig {
            addr: non_empty(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            dictionaries: non_empty(DICTIONARIES_VAR).map(PathBuf::from),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let translator = match &config.dictionaries {
        Some(dir) => {
            info!("Loading dictionaries from {}", dir.display());
            Translator::new(&load_dictionaries_from_dir(dir)?)?
        }
        None => Translator::new(Dictionaries::embedded())?,
    };
    let state = AppState {
        translator: Arc::new(translator),
    };

    info!("Starting American/British translator web server");

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/translate", post(translate_text))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

/// Check the request fields and pick the direction
pub fn validate(request: TranslateRequest) -> Result<(String, Direction), RequestError> {
    let (Some(text), Some(locale)) = (request.text, request.locale) else {
        return Err(RequestError::MissingField);
    };
    if text.trim().is_empty() {
        return Err(RequestError::EmptyText);
    }
    let direction = locale
        .parse::<Direction>()
        .map_err(|_| RequestError::InvalidLocale)?;
    Ok((text, direction))
}

async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, RequestError> {
    // A body that is not a JSON object carries no fields at all
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            TranslateRequest::default()
        }
    };

    let (text, direction) = validate(request).inspect_err(|e| {
        info!("Invalid translation request: {}", e);
    })?;

    let translation = state.translator.translate(&text, direction);
    info!(
        "Translated {} chars ({}), {} replacement(s)",
        text.chars().count(),
        direction,
        translation.replacements().len()
    );

    Ok(Json(TranslateResponse {
        text,
        translation: translation.into_message(),
    }))
}
