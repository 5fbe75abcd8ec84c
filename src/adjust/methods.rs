/*!
 * This is the adjust methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `AdjustMethod`
 * - An enum variant containing that struct in `AdjustChoice`
 * - A constructor arg_name and function in `ADJUST_TARGET_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    scene,
    adjust,
    args,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new adjust method
//      |
//      V
//

// Source files for the adjust methods
mod script;

// Re-export the event vocabulary
pub use script::AdjustEvent;

/// Adjust methods enum.
/// To add a new method:
/// include it here,
/// add handling for its constructor in `ADJUST_TARGET_CONSTRUCTION`,
/// and implement the `AdjustMethod` trait for it.
#[derive(Debug)]
#[enum_dispatch(AdjustMethod)]
pub enum AdjustChoice {
    /// Ordered rotate/scale events applied around the stored anchor.
    Script(script::Method),
}

/// Adjust construction array -- Written out in one place for easy modification.
/// To add a new method:
/// include it in the `AdjustChoice` enum,
/// add handling for its constructor here,
/// and implement the `AdjustMethod` trait for it.
const ADJUST_TARGET_CONSTRUCTION: &[AdjustConstructor] = &[
    // Event script constructor.
    AdjustConstructor{
        arg_name: "script",
        constructor: || {Ok(AdjustChoice::Script(script::Method::new()?))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new adjust method
//      |
//      V
//

/// Adjust method trait.
/// This trait defines the functions that all adjust methods must implement.
/// To add a new method:
/// include it in the `AdjustChoice` enum,
/// add handling for its constructor in `ADJUST_TARGET_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait AdjustMethod {
    /// Get the name of the adjust method.
    fn get_method_name(&self) -> String;

    /// Parse the adjust method config file (allows different arguments for different methods).
    /// Takes a `&str` with the path to the config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()>;

    /// Adjust a placed object around its stored anchor.
    /// Returns a `ProcResult` with `()` or an `Err`.
    fn do_adjust(&self, object: &mut scene::Placeable) -> adjust::ProcResult<()>;

    /// Serialize the method config (current values) for the example command.
    fn example_method_cfg(&self, format: args::Format) -> args::ProcResult<String>;
}

/// Adjust constructor struct. Used to construct the adjust methods from the arg_name string.
struct AdjustConstructor {
    /// Name of the adjust method.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> args::ProcResult<AdjustChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Adjust target construction
impl AdjustChoice {
    /// Construct an adjust method from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in ADJUST_TARGET_CONSTRUCTION.iter() {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)();
            }
        }

        // If the arg_name is not found, return an error with the available methods
        let mut error_str = format!("Adjust method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for constructor in ADJUST_TARGET_CONSTRUCTION.iter() {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        args::err_str(&error_str)
    }

    /// List the available method names.
    pub fn method_names() -> Vec<&'static str> {
        ADJUST_TARGET_CONSTRUCTION.iter().map(|c| c.arg_name).collect()
    }
}
