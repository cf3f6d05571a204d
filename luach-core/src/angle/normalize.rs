//! Range reductions used by the correction tables and the latitude rule.
//!
//! | Reduction | Result range | Function |
//! |-----------|--------------|----------|
//! | Wrap into one circle | [0, 77 760 000) thirds | [`wrap_circle_thirds`] |
//! | Signed longitude | (-180°, 180°] | [`signed_degrees`] |
//! | Reflect about the half circle | [0°, 180°] | [`reflect_half_circle`] |
//! | Fold into the first quadrant | [0°, 90°] | [`fold_quadrant`] |
//!
//! Reflection and folding report whether the input was in the far half of the
//! circle; callers use that flag to pick the sign of a correction (add or
//! subtract) or the hemisphere of a latitude (north or south).
//!
//! # Example
//!
//! ```
//! use luach_core::angle::{fold_quadrant, reflect_half_circle};
//!
//! assert_eq!(reflect_half_circle(200.0), (160.0, true));
//! assert_eq!(fold_quadrant(200.0), (20.0, true));
//! assert_eq!(fold_quadrant(100.0), (80.0, false));
//! ```

use crate::constants::THIRDS_PER_CIRCLE;
use crate::math::wrap_positive;

/// Wraps a total of thirds into `[0, THIRDS_PER_CIRCLE)`.
#[inline]
pub fn wrap_circle_thirds(thirds: f64) -> f64 {
    wrap_positive(thirds, THIRDS_PER_CIRCLE)
}

/// Maps degrees into `(-180, 180]`.
///
/// Exactly 180° stays positive, matching the boundary of [`reflect_half_circle`].
pub fn signed_degrees(degrees: f64) -> f64 {
    let w = wrap_positive(degrees, 360.0);
    if w > 180.0 {
        w - 360.0
    } else {
        w
    }
}

/// Reflects degrees above 180 to `360 - x`.
///
/// Returns the reduced argument and whether it was reflected.
pub fn reflect_half_circle(degrees: f64) -> (f64, bool) {
    let w = wrap_positive(degrees, 360.0);
    if w > 180.0 {
        (360.0 - w, true)
    } else {
        (w, false)
    }
}

/// Folds degrees into `[0, 90]` by quadrant.
///
/// Returns the folded argument and whether the input lay beyond 180°.
pub fn fold_quadrant(degrees: f64) -> (f64, bool) {
    let w = wrap_positive(degrees, 360.0);
    let far_half = w > 180.0;
    let folded = if w > 270.0 {
        360.0 - w
    } else if far_half {
        w - 180.0
    } else if w > 90.0 {
        180.0 - w
    } else {
        w
    };
    (folded, far_half)
}
