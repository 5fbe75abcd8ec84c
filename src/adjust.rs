mod proc_errors;
mod cfg;
mod methods;

use crate::scene::Placeable;

// Re-export errors
pub use proc_errors::{
    AdjustError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    AdjustArgs,
    AdjustTarget,
};
// Re-export adjust methods
pub use methods::{
    AdjustChoice,
    AdjustMethod,
    AdjustEvent,
};

/// Rotate a placed object around its stored anchor point and normal.
/// The angle is in degrees, matching the adjust config files; positive
/// angles follow the right-hand rule around the anchor normal.
/// The anchor point stays fixed in world space.
/// Returns an `Err` when the object has no anchor record.
pub fn rotate_about_anchor(object: &mut Placeable, degrees: f32) -> ProcResult<()> {
    let anchor = match object.anchor.as_ref() {
        Some(anchor) => anchor.clone(),
        None => {
            return err_str(&format!("Object \"{}\" is not registered; nothing to rotate around", object.name));
        },
    };

    // Normal vectors must be unit length before any rotation math
    let axis = anchor.normal.normalize();
    object.transform.rotate_around(anchor.point, &axis, degrees.to_radians());

    Ok(())
}

/// Scale a placed object around its stored anchor point.
/// The anchor point stays fixed in world space: the scale picks up the
/// rate and the position moves toward or away from the anchor.
/// Returns an `Err` when the object has no anchor record or the rate is
/// not positive.
pub fn scale_about_anchor(object: &mut Placeable, rate: f32) -> ProcResult<()> {
    if rate <= 0.0 || rate.is_nan() {
        err_str(&format!("Scale rate must be positive, got {}", rate))?;
    }

    let anchor = match object.anchor.as_ref() {
        Some(anchor) => anchor.clone(),
        None => {
            return err_str(&format!("Object \"{}\" is not registered; nothing to scale around", object.name));
        },
    };

    object.transform.scale_around(anchor.point, rate);

    Ok(())
}

/// Run the adjust stage on a placed object.
/// Returns a `ProcResult` with `()` or an `Err`.
pub fn do_adjust(adjust_target: &AdjustTarget, object: &mut Placeable) -> ProcResult<()> {
    let adjust_method = &adjust_target.adjust_method;

    println!("Running adjust method: {}...", adjust_method.get_method_name());
    adjust_method.do_adjust(object)
}
