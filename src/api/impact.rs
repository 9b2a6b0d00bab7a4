use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse, v1::ApiQuery},
    domain::EnvironmentalImpact,
    simulation::compute_impact,
};

#[derive(Debug, Deserialize, Validate)]
pub struct ImpactQuery {
    #[validate(range(min = 0.0))]
    pub total_kwh: f64,
}

/// GET /api/v1/impact?total_kwh= - Environmental equivalents of an energy total
pub async fn get_impact(
    ApiQuery(q): ApiQuery<ImpactQuery>,
) -> Result<Json<ApiResponse<EnvironmentalImpact>>, ApiError> {
    q.validate()?;
    if !q.total_kwh.is_finite() {
        return Err(ApiError::ValidationError("total_kwh must be finite".to_string()));
    }
    Ok(Json(ApiResponse::success(compute_impact(q.total_kwh))))
}
