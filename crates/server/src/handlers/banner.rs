//! # Banner Generation Handler
//!
//! `POST /api/generate-banner` validates the request, resolves the generation
//! provider and runs the banner pipeline once.

use crate::{
    errors::AppError,
    state::AppState,
    types::{GenerateBannerRequest, MISSING_FIELDS_MESSAGE},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use bannergen::{BannerGenerator, BannerResult, GenerationDirective};
use tracing::{info, warn};

pub async fn generate_banner_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<GenerateBannerRequest>, JsonRejection>,
) -> Result<Json<BannerResult>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Unreadable banner request body: {}", rejection.body_text());
        AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let (url, template) = payload
        .required_fields()
        .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))?;

    // Input problems are reported before anything touches the network.
    let directive = GenerationDirective::parse(url, template)?;
    info!(
        "Received banner request for '{}' with template '{}'",
        directive.url, directive.template
    );

    let ai_provider = app_state.ai_provider.resolve()?;
    let generator = BannerGenerator::new(
        app_state.fetcher.as_ref(),
        ai_provider.as_ref(),
        app_state.pipeline_options,
    );
    let banner = generator.generate(&directive).await?;

    Ok(Json(banner))
}

/// Any method other than POST (and the CORS preflight) on the banner route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
