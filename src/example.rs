use crate::{
    args,
    raycast,
    register,
    adjust,
    PlacardResult,
};
use crate::raycast::RaycastMethod;
use crate::register::RegisterMethod;
use crate::adjust::AdjustMethod;

/// Serialize a config value in the requested format.
fn to_cfg_string<T: serde::Serialize>(value: &T, format: args::Format) -> args::ProcResult<String> {
    match format {
        args::Format::Yaml => Ok(serde_yaml::to_string(value)?),
        args::Format::Json => Ok(serde_json::to_string_pretty(value)?),
        args::Format::Toml => Ok(toml::to_string_pretty(value)?),
    }
}

/// Print the available method names for a stage.
fn print_methods(method_names: &[&str]) {
    println!("Available methods:");
    for name in method_names {
        println!("    {}", name);
    }
}

/// Display an example config file for a stage.
/// Without a method name, lists the available methods for the stage.
/// With one, prints the stage config with placeholder paths and the
/// method config with its default values.
/// Returns a `PlacardResult` with `()` or an `Err`.
pub fn display_config(example_args: args::ExampleArgs) -> PlacardResult<()> {
    let method_name = match example_args.method {
        Some(ref method_name) => method_name.clone(),
        None => {
            match example_args.stage {
                args::RunStage::Raycast => print_methods(&raycast::RaycastChoice::method_names()),
                args::RunStage::Register => print_methods(&register::RegisterChoice::method_names()),
                args::RunStage::Adjust => print_methods(&adjust::AdjustChoice::method_names()),
            }
            return Ok(());
        },
    };

    match example_args.stage {
        args::RunStage::Raycast => {
            let method = raycast::RaycastChoice::from_name(&method_name)?;
            let stage_cfg = raycast::RaycastArgs{
                method_name: method_name.clone(),
                method_cfg: "PATH/TO/METHOD/CFG/FILE".to_string(),
                screen_x: 0.0,
                screen_y: 0.0,
                output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE.json".to_string()),
                save: false,
            };
            println!("Stage config:");
            println!("{}", to_cfg_string(&stage_cfg, example_args.format)?);
            println!("Method config ({}):", method_name);
            println!("{}", method.example_method_cfg(example_args.format)?);
        },
        args::RunStage::Register => {
            let method = register::RegisterChoice::from_name(&method_name)?;
            let stage_cfg = register::RegisterArgs{
                method_name: method_name.clone(),
                method_cfg: "PATH/TO/METHOD/CFG/FILE".to_string(),
                object_path: "PATH/TO/OBJECT/FILE".to_string(),
                hit_path: Some("OPTIONAL/PATH/TO/INPUT/FILE.json".to_string()),
                output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE.json".to_string()),
                save: false,
            };
            println!("Stage config:");
            println!("{}", to_cfg_string(&stage_cfg, example_args.format)?);
            println!("Method config ({}):", method_name);
            println!("{}", method.example_method_cfg(example_args.format)?);
        },
        args::RunStage::Adjust => {
            let method = adjust::AdjustChoice::from_name(&method_name)?;
            let stage_cfg = adjust::AdjustArgs{
                method_name: method_name.clone(),
                method_cfg: "PATH/TO/METHOD/CFG/FILE".to_string(),
                input_path: Some("OPTIONAL/PATH/TO/INPUT/FILE.json".to_string()),
                output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE.json".to_string()),
                save: false,
            };
            println!("Stage config:");
            println!("{}", to_cfg_string(&stage_cfg, example_args.format)?);
            println!("Method config ({}):", method_name);
            println!("{}", method.example_method_cfg(example_args.format)?);
        },
    }

    Ok(())
}
