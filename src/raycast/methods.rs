/*!
 * This is the raycast methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `RaycastMethod`
 * - An enum variant containing that struct in `RaycastChoice`
 * - A constructor arg_name and function in `RAYCAST_TARGET_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    raycast,
    scene,
    args,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new raycast method
//      |
//      V
//

// Source files for the raycast methods
mod pinhole;
mod orthographic;

/// Raycast methods enum.
/// To add a new method:
/// include it here,
/// add handling for its constructor in `RAYCAST_TARGET_CONSTRUCTION`,
/// and implement the `RaycastMethod` trait for it.
#[derive(Debug)]
#[enum_dispatch(RaycastMethod)]
pub enum RaycastChoice {
    /// Perspective pick ray from the camera through the near clip plane.
    Pinhole(pinhole::Method),
    /// Parallel pick ray along the camera view direction.
    Orthographic(orthographic::Method),
}

/// Raycast construction array -- Written out in one place for easy modification.
/// To add a new method:
/// include it in the `RaycastChoice` enum,
/// add handling for its constructor here,
/// and implement the `RaycastMethod` trait for it.
const RAYCAST_TARGET_CONSTRUCTION: &[RaycastConstructor] = &[
    // Perspective unprojection constructor.
    RaycastConstructor{
        arg_name: "pinhole",
        constructor: || {Ok(RaycastChoice::Pinhole(pinhole::Method::new()?))},
    },
    // Orthographic projection constructor.
    RaycastConstructor{
        arg_name: "orthographic",
        constructor: || {Ok(RaycastChoice::Orthographic(orthographic::Method::new()?))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new raycast method
//      |
//      V
//

/// Raycast method trait.
/// This trait defines the functions that all raycast methods must implement.
/// To add a new method:
/// include it in the `RaycastChoice` enum,
/// add handling for its constructor in `RAYCAST_TARGET_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait RaycastMethod {
    /// Get the name of the raycast method.
    fn get_method_name(&self) -> String;

    /// Parse the raycast method config file (allows different arguments for different methods).
    /// Takes a `&str` with the path to the config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()>;

    /// Build the pick ray for a screen point and cast it against the
    /// tracked planes.
    /// Returns a `ProcResult` with the `PlaneHit` or an `Err`.
    fn do_raycast(&self, scene: &scene::Scene, screen: &raycast::ScreenPoint) -> raycast::ProcResult<raycast::PlaneHit>;

    /// Serialize the method config (current values) for the example command.
    fn example_method_cfg(&self, format: args::Format) -> args::ProcResult<String>;
}

/// Raycast constructor struct. Used to construct the raycast methods from the arg_name string.
struct RaycastConstructor {
    /// Name of the raycast method.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> args::ProcResult<RaycastChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Raycast target construction
impl RaycastChoice {
    /// Construct a raycast method from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in RAYCAST_TARGET_CONSTRUCTION.iter() {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)();
            }
        }

        // If the arg_name is not found, return an error with the available methods
        let mut error_str = format!("Raycast method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for constructor in RAYCAST_TARGET_CONSTRUCTION.iter() {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        args::err_str(&error_str)
    }

    /// List the available method names.
    pub fn method_names() -> Vec<&'static str> {
        RAYCAST_TARGET_CONSTRUCTION.iter().map(|c| c.arg_name).collect()
    }
}
