//! Shell geometry validation.

use super::helpers::{validate_non_negative, validate_positive, validate_range};
use crate::schema::{DomeConfig, MAX_DETAIL};

pub(super) fn validate_shape(errors: &mut Vec<String>, config: &DomeConfig) {
    let shape = &config.shape;

    validate_range(errors, "shape.detail", shape.detail, 0, MAX_DETAIL);
    validate_positive(errors, "shape.radius", shape.radius);
    validate_non_negative(errors, "shape.max_shift", shape.max_shift);

    // Zero would collapse every face to its centroid.
    if !shape.face_scale.is_finite() || shape.face_scale <= 0.0 || shape.face_scale > 1.0 {
        errors.push(format!(
            "shape.face_scale = {} is out of range (0, 1]",
            shape.face_scale
        ));
    }
}
