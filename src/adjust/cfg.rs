use crate::args;
use crate::adjust::{
    AdjustChoice,
    AdjustMethod,
};
use serde::{Serialize, Deserialize};

/// Arguments for the adjust stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdjustArgs {
    /// Adjust method.
    #[serde(rename = "method")]
    pub method_name: String,

    /// Adjust method config file.
    pub method_cfg: String,

    /// Input path for the placed object file (must be json).
    /// Only needed when adjust is the first stage targeted.
    #[serde(default, alias = "input", alias = "in", alias = "i")]
    pub input_path: Option<String>,

    /// Output path for the adjusted object file (must be json).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,

    /// Force save the adjusted object file, even if it's not the last stage targeted.
    #[serde(default, rename = "force_save")]
    pub save: bool,
}

/// Adjust target struct.
/// Contains the adjust method and arguments.
pub struct AdjustTarget {
    /// Adjust method.
    pub adjust_method: AdjustChoice,
    /// Adjust arguments.
    pub adjust_args: AdjustArgs,
}
impl AdjustTarget {
    /// Construct an adjust target from a config file.
    pub fn from_cfg_file(cfg_file: &str, is_first: bool, is_last: bool) -> args::ProcResult<Self> {
        let mut adjust_args: AdjustArgs = crate::io::read_cfg_file(cfg_file)?;

        let mut adjust_method = AdjustChoice::from_name(&adjust_args.method_name)?;

        // Check the object input path: without an upstream register stage,
        // the placed object has to come from a file
        if is_first && adjust_args.input_path.is_none() {
            args::err_str("Adjust input path not specified, but adjust is the first stage targeted")?;
        }
        if let Some(input_path) = adjust_args.input_path.as_ref() {
            if !input_path.ends_with(".json") {
                args::err_str("Adjust input path must end with .json")?;
            }
        }

        // Check the output path
        if adjust_args.save && adjust_args.output_path.is_none() {
            args::err_str("Adjust output path not specified, but force_save was set")?;
        }

        adjust_args.save |= is_last;

        if adjust_args.save {
            if let Some(output_path) = adjust_args.output_path.as_ref() {
                if !output_path.ends_with(".json") {
                    args::err_str("Adjust output path must end with .json")?;
                }
                let _ = crate::io::create(output_path)?;
            }
            else {
                args::err_str("Adjust output path not specified, but saving is required at the last stage")?;
            }
        }

        // Parse the method-specific arguments
        adjust_method.parse_method_cfg(&adjust_args.method_cfg)?;

        Ok(AdjustTarget{adjust_method, adjust_args})
    }
}
