use crate::args;
use crate::raycast::{
    RaycastChoice,
    RaycastMethod,
};
use serde::{Serialize, Deserialize};

/// Arguments for the raycast stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct RaycastArgs {
    /// Raycast method.
    #[serde(rename = "method")]
    pub method_name: String,

    /// Raycast method config file.
    pub method_cfg: String,

    /// Horizontal pick coordinate, in pixels from the left edge.
    #[serde(alias = "x")]
    pub screen_x: f32,

    /// Vertical pick coordinate, in pixels from the bottom edge.
    #[serde(alias = "y")]
    pub screen_y: f32,

    /// Output path for the hit file (must be json).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,

    /// Force save the hit file, even if it's not the last stage targeted.
    #[serde(default, rename = "force_save")]
    pub save: bool,
}

/// Raycast target struct.
/// Contains the raycast method and arguments.
pub struct RaycastTarget {
    /// Raycast method.
    pub raycast_method: RaycastChoice,
    /// Raycast arguments.
    pub raycast_args: RaycastArgs,
}
impl RaycastTarget {
    /// Construct a raycast target from a config file.
    pub fn from_cfg_file(cfg_file: &str, is_last: bool) -> args::ProcResult<Self> {
        let mut raycast_args: RaycastArgs = crate::io::read_cfg_file(cfg_file)?;

        let mut raycast_method = RaycastChoice::from_name(&raycast_args.method_name)?;

        // Check the output path
        if raycast_args.save && raycast_args.output_path.is_none() {
            args::err_str("Raycast output path not specified, but force_save was set")?;
        }

        raycast_args.save |= is_last;

        if raycast_args.save {
            if let Some(output_path) = raycast_args.output_path.as_ref() {
                if !output_path.ends_with(".json") {
                    args::err_str("Raycast output path must end with .json")?;
                }
                let _ = crate::io::create(output_path)?;
            }
            else {
                args::err_str("Raycast output path not specified, but saving is required at the last stage")?;
            }
        }

        // Parse the method-specific arguments
        raycast_method.parse_method_cfg(&raycast_args.method_cfg)?;

        Ok(RaycastTarget{raycast_method, raycast_args})
    }
}
