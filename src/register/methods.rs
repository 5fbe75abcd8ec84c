/*!
 * This is the registration methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `RegisterMethod`
 * - An enum variant containing that struct in `RegisterChoice`
 * - A constructor arg_name and function in `REGISTER_TARGET_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    raycast,
    register,
    scene,
    args,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new registration method
//      |
//      V
//

// Source files for the registration methods
mod shortest_arc;

/// Registration methods enum.
/// To add a new method:
/// include it here,
/// add handling for its constructor in `REGISTER_TARGET_CONSTRUCTION`,
/// and implement the `RegisterMethod` trait for it.
#[derive(Debug)]
#[enum_dispatch(RegisterMethod)]
pub enum RegisterChoice {
    /// Minimal-arc alignment of the anchor normal onto the surface normal.
    ShortestArc(shortest_arc::Method),
}

/// Registration construction array -- Written out in one place for easy modification.
/// To add a new method:
/// include it in the `RegisterChoice` enum,
/// add handling for its constructor here,
/// and implement the `RegisterMethod` trait for it.
const REGISTER_TARGET_CONSTRUCTION: &[RegisterConstructor] = &[
    // Shortest-arc alignment constructor.
    RegisterConstructor{
        arg_name: "shortest_arc",
        constructor: || {Ok(RegisterChoice::ShortestArc(shortest_arc::Method::new()?))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new registration method
//      |
//      V
//

/// Registration method trait.
/// This trait defines the functions that all registration methods must implement.
/// To add a new method:
/// include it in the `RegisterChoice` enum,
/// add handling for its constructor in `REGISTER_TARGET_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait RegisterMethod {
    /// Get the name of the registration method.
    fn get_method_name(&self) -> String;

    /// Parse the registration method config file (allows different arguments for different methods).
    /// Takes a `&str` with the path to the config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()>;

    /// Register the object onto the plane referenced by the hit.
    /// Returns a `ProcResult` with `()` or an `Err`.
    fn do_register(&self, object: &mut scene::Placeable, hit: &raycast::PlaneHit, scene: &scene::Scene) -> register::ProcResult<()>;

    /// Serialize the method config (current values) for the example command.
    fn example_method_cfg(&self, format: args::Format) -> args::ProcResult<String>;
}

/// Registration constructor struct. Used to construct the registration methods from the arg_name string.
struct RegisterConstructor {
    /// Name of the registration method.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> args::ProcResult<RegisterChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Register target construction
impl RegisterChoice {
    /// Construct a registration method from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in REGISTER_TARGET_CONSTRUCTION.iter() {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)();
            }
        }

        // If the arg_name is not found, return an error with the available methods
        let mut error_str = format!("Registration method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for constructor in REGISTER_TARGET_CONSTRUCTION.iter() {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        args::err_str(&error_str)
    }

    /// List the available method names.
    pub fn method_names() -> Vec<&'static str> {
        REGISTER_TARGET_CONSTRUCTION.iter().map(|c| c.arg_name).collect()
    }
}
