use crate::args;
use crate::register::{
    RegisterChoice,
    RegisterMethod,
};
use serde::{Serialize, Deserialize};

/// Arguments for the register stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterArgs {
    /// Registration method.
    #[serde(rename = "method")]
    pub method_name: String,

    /// Registration method config file.
    pub method_cfg: String,

    /// Path to the placeable object file.
    #[serde(alias = "object")]
    pub object_path: String,

    /// Input path for the hit file (must be json).
    /// Only needed when register is the first stage targeted.
    #[serde(default, alias = "hit", alias = "input", alias = "in", alias = "i")]
    pub hit_path: Option<String>,

    /// Output path for the placed object file (must be json).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,

    /// Force save the placed object file, even if it's not the last stage targeted.
    #[serde(default, rename = "force_save")]
    pub save: bool,
}

/// Register target struct.
/// Contains the registration method and arguments.
pub struct RegisterTarget {
    /// Registration method.
    pub register_method: RegisterChoice,
    /// Registration arguments.
    pub register_args: RegisterArgs,
}
impl RegisterTarget {
    /// Construct a register target from a config file.
    pub fn from_cfg_file(cfg_file: &str, is_first: bool, is_last: bool) -> args::ProcResult<Self> {
        let mut register_args: RegisterArgs = crate::io::read_cfg_file(cfg_file)?;

        let mut register_method = RegisterChoice::from_name(&register_args.method_name)?;

        // Check the hit input path: without an upstream raycast stage,
        // the hit has to come from a file
        if is_first && register_args.hit_path.is_none() {
            args::err_str("Register hit input path not specified, but register is the first stage targeted")?;
        }
        if let Some(hit_path) = register_args.hit_path.as_ref() {
            if !hit_path.ends_with(".json") {
                args::err_str("Register hit input path must end with .json")?;
            }
        }

        // Check the output path
        if register_args.save && register_args.output_path.is_none() {
            args::err_str("Register output path not specified, but force_save was set")?;
        }

        register_args.save |= is_last;

        if register_args.save {
            if let Some(output_path) = register_args.output_path.as_ref() {
                if !output_path.ends_with(".json") {
                    args::err_str("Register output path must end with .json")?;
                }
                let _ = crate::io::create(output_path)?;
            }
            else {
                args::err_str("Register output path not specified, but saving is required at the last stage")?;
            }
        }

        // Parse the method-specific arguments
        register_method.parse_method_cfg(&register_args.method_cfg)?;

        Ok(RegisterTarget{register_method, register_args})
    }
}
