//! Local checks run before any create/update call

use crate::money;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::VariationPayload;
use shared::types::UNSET_ID;

/// Color, variant and a positive selling price are required, checked in that order
pub fn validate_payload(payload: &VariationPayload) -> AppResult<()> {
    if payload.color_id == UNSET_ID {
        return Err(AppError::validation(ErrorCode::VariationColorRequired));
    }
    if payload.variant_id == UNSET_ID {
        return Err(AppError::validation(ErrorCode::VariationVariantRequired));
    }
    if !money::is_positive_price(payload.selling_price) {
        return Err(AppError::validation(ErrorCode::VariationPriceInvalid)
            .with_detail("selling_price", payload.selling_price));
    }
    Ok(())
}
