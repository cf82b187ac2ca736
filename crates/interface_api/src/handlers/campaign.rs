//! Campaign handlers

use axum::{extract::State, Json};

use crate::{AppState, error::ApiError};
use crate::dto::campaign::CampaignResponse;

/// Lists every campaign as `{id, name}`
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampaignResponse>>, ApiError> {
    let campaigns = state.campaigns.get_all_campaigns().await?;

    Ok(Json(campaigns.into_iter().map(CampaignResponse::from).collect()))
}
