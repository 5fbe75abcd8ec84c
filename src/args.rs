mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Plane-Locked Anchoring with Camera-Aided Registration for Displays tool.
#[derive(Debug, Parser)]
pub struct PlacardCli {
    #[clap(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the placard binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "run")]
    /// Run placement stages from raycasting through anchor adjustment.
    Run(RunArgs),

    #[command(name = "example")]
    /// Print an example config file for a placement stage.
    Example(ExampleArgs),
}

/// Placement stages, in running order.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
#[derive(strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RunStage {
    /// Cast the pick ray against the tracked planes.
    Raycast,
    /// Solve the anchor registration onto the hit plane.
    Register,
    /// Apply scripted rotation and scaling around the anchor.
    Adjust,
}
impl RunStage {
    /// Get the running order of the stage (1-indexed).
    pub fn stage_num(&self) -> u32 {
        match self {
            RunStage::Raycast => 1,
            RunStage::Register => 2,
            RunStage::Adjust => 3,
        }
    }
}

/// Shared arguments, used by all run stages. Compiled with clap.
#[derive(Debug, Args)]
pub struct SharedArgs {
    #[arg(short, long = "scene")]
    /// Path to the tracked scene file (.yaml/.json/.toml).
    pub scene_path: String,
}

/// Compiled arguments for the run command. Compiled with clap.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(value_enum)]
    /// First stage to run.
    pub start_stage: RunStage,

    #[arg(value_enum)]
    /// Last stage to run. Defaults to the start stage.
    pub end_stage: Option<RunStage>,

    #[arg(long = "raycast")]
    /// Path to the raycast stage config file.
    pub raycast_cfg: Option<String>,

    #[arg(long = "register")]
    /// Path to the register stage config file.
    pub register_cfg: Option<String>,

    #[arg(long = "adjust")]
    /// Path to the adjust stage config file.
    pub adjust_cfg: Option<String>,

    #[command(flatten)]
    pub shared_args: SharedArgs,
}

/// Config file formats for the example command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(value_enum)]
    /// Stage to print an example config for.
    pub stage: RunStage,

    /// Method to print an example method config for.
    /// Omit to list the available methods.
    pub method: Option<String>,

    #[arg(short, long, value_enum, default_value = "yaml")]
    /// Output format.
    pub format: Format,
}

/// Parse the command line arguments for the placard binary.
/// Uses the `clap` crate.
pub fn parse_cli_args() -> PlacardCli {
    PlacardCli::parse()
}
