pub mod args;
pub mod io;
pub mod geo_3d;
pub mod scene;
pub mod raycast;
pub mod register;
pub mod adjust;
pub mod example;
mod crate_errors;

use strum::IntoEnumIterator;

pub use crate_errors::{
    PlacardError,
    PlacardResult,
    err_str,
};

/// Targets struct.
/// This struct contains the stage targets to run.
pub struct Targets {
    pub raycast_target: Option<raycast::RaycastTarget>,
    pub register_target: Option<register::RegisterTarget>,
    pub adjust_target: Option<adjust::AdjustTarget>,
    pub shared_args: args::SharedArgs,
}

/// [Stage 1.]
/// Build the stage targets from the parsed command line arguments.
/// Expects to see a start stage and an optional end stage that must not
/// come before the start.
/// For each stage to be run between them, checks for a required
/// corresponding config file.
/// Returns a `PlacardResult` with the `Targets` or an `Err`.
pub fn build_targets(cli_args: args::RunArgs) -> PlacardResult<Targets> {
    let end_stage = if let Some(end_stage) = cli_args.end_stage {
        end_stage
    } else {
        cli_args.start_stage
    };

    if cli_args.start_stage.stage_num() > end_stage.stage_num() {
        args::err_str(&format!("Start stage ({}) is after end stage ({})", cli_args.start_stage, end_stage))?;
    }
    if cli_args.start_stage.stage_num() == end_stage.stage_num() {
        println!("Stage to run: {}...", cli_args.start_stage);
    }
    else {
        println!("Stages to run: {} through {}...", cli_args.start_stage, end_stage);
    }

    let mut targets = Targets{
        raycast_target: None,
        register_target: None,
        adjust_target: None,
        shared_args: cli_args.shared_args,
    };

    for stage in args::RunStage::iter() {
        if stage.stage_num() < cli_args.start_stage.stage_num() {
            continue;
        }
        if stage.stage_num() > end_stage.stage_num() {
            break;
        }
        let is_first = stage.stage_num() == cli_args.start_stage.stage_num();
        let is_last = stage.stage_num() == end_stage.stage_num();

        match stage {
            args::RunStage::Raycast => {
                if let Some(raycast_cfg_file) = &cli_args.raycast_cfg {
                    println!("Loading raycast config file: {}...", raycast_cfg_file);
                    targets.raycast_target = Some(raycast::RaycastTarget::from_cfg_file(
                        raycast_cfg_file,
                        is_last
                    )?);
                }
                else {
                    args::err_str("Raycast config file not specified")?;
                }
            },
            args::RunStage::Register => {
                if let Some(register_cfg_file) = &cli_args.register_cfg {
                    println!("Loading register config file: {}...", register_cfg_file);
                    targets.register_target = Some(register::RegisterTarget::from_cfg_file(
                        register_cfg_file,
                        is_first,
                        is_last
                    )?);
                }
                else {
                    args::err_str("Register config file not specified")?;
                }
            },
            args::RunStage::Adjust => {
                if let Some(adjust_cfg_file) = &cli_args.adjust_cfg {
                    println!("Loading adjust config file: {}...", adjust_cfg_file);
                    targets.adjust_target = Some(adjust::AdjustTarget::from_cfg_file(
                        adjust_cfg_file,
                        is_first,
                        is_last
                    )?);
                }
                else {
                    args::err_str("Adjust config file not specified")?;
                }
            },
        }
    }

    Ok(targets)
}

/// [Stage 2.]
/// Run the placement process on the targets.
/// Stage outputs chain into the next stage in memory; each stage saves
/// its output when it is the last stage targeted or force_save is set.
/// Returns a `PlacardResult` with `()` or an `Err`.
pub fn run_process(targets: Targets) -> PlacardResult<()> {

    // 2.1 Load the tracked scene (needed by the raycast and register stages)
    let scene = if targets.raycast_target.is_some() || targets.register_target.is_some() {
        println!("Loading scene file: {}...", targets.shared_args.scene_path);
        Some(scene::Scene::load(&targets.shared_args.scene_path)?)
    } else {
        None
    };

    // 2.2 Run the raycast stage
    let hit_out = match targets.raycast_target {
        Some(raycast_target) => {
            println!();
            println!("##################");
            println!("Running raycast...");
            println!("##################");
            println!();
            let scene_in = match scene.as_ref() {
                Some(scene_in) => scene_in,
                None => panic!("BUG: Running the raycast, but missing the scene! Should've been loaded!"),
            };
            let hit = raycast::do_raycast(&raycast_target, scene_in)?;
            println!("Hit plane \"{}\" at {}", hit.plane_id, hit.point);

            if raycast_target.raycast_args.save {
                let output_path = match raycast_target.raycast_args.output_path.as_ref() {
                    Some(output_path) => output_path,
                    None => panic!("BUG: Saving the hit, but missing output path! Should've been checked!"),
                };
                raycast::save_hit(&hit, output_path)?;
            }
            Some(hit)
        },
        None => None,
    };

    // 2.3 Run the register stage
    let placed_out = match targets.register_target {
        Some(register_target) => {
            println!();
            println!("#######################");
            println!("Running registration...");
            println!("#######################");
            println!();
            let scene_in = match scene.as_ref() {
                Some(scene_in) => scene_in,
                None => panic!("BUG: Running the registration, but missing the scene! Should've been loaded!"),
            };
            let hit_in = match hit_out {
                Some(hit_out) => hit_out,
                None => {
                    let hit_path = match register_target.register_args.hit_path.as_ref() {
                        Some(hit_path) => hit_path,
                        None => panic!("BUG: Running the registration, but missing hit input path! Should've been checked!"),
                    };
                    raycast::load_hit(hit_path)?
                },
            };
            println!("Loading object file: {}...", register_target.register_args.object_path);
            let mut object = scene::Placeable::load(&register_target.register_args.object_path)?;

            register::do_register(&register_target, &mut object, &hit_in, scene_in)?;
            println!("Registered \"{}\" onto plane \"{}\"", object.name, hit_in.plane_id);

            if register_target.register_args.save {
                let output_path = match register_target.register_args.output_path.as_ref() {
                    Some(output_path) => output_path,
                    None => panic!("BUG: Saving the placed object, but missing output path! Should've been checked!"),
                };
                println!("Saving placed object to {}...", output_path);
                object.save(output_path)?;
            }
            Some(object)
        },
        None => None,
    };

    // 2.4 Run the adjust stage
    if let Some(adjust_target) = targets.adjust_target {
        println!();
        println!("#################");
        println!("Running adjust...");
        println!("#################");
        println!();
        let mut object = match placed_out {
            Some(placed_out) => placed_out,
            None => {
                let input_path = match adjust_target.adjust_args.input_path.as_ref() {
                    Some(input_path) => input_path,
                    None => panic!("BUG: Running the adjust, but missing input path! Should've been checked!"),
                };
                println!("Loading object file: {}...", input_path);
                scene::Placeable::load(input_path)?
            },
        };

        adjust::do_adjust(&adjust_target, &mut object)?;
        println!("Adjusted \"{}\" around its anchor", object.name);

        if adjust_target.adjust_args.save {
            let output_path = match adjust_target.adjust_args.output_path.as_ref() {
                Some(output_path) => output_path,
                None => panic!("BUG: Saving the adjusted object, but missing output path! Should've been checked!"),
            };
            println!("Saving adjusted object to {}...", output_path);
            object.save(output_path)?;
        }
    }

    Ok(())
}
