use crate::{
    scene,
    adjust,
    args,
};

use serde::{Serialize, Deserialize};

/// A single adjust event, applied around the stored anchor.
/// The distilled form of a rotate or pinch gesture.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AdjustEvent {
    /// Rotate around the anchor normal by a signed angle in degrees.
    Rotate{degrees: f32},
    /// Scale around the anchor point by a strictly positive rate.
    Scale{rate: f32},
}

/// Script adjust method struct.
/// Applies an ordered list of rotate/scale events to the placed object.
#[derive(Debug)]
pub struct Method {
    method_args: MethodArgs,
}
impl Method {
    pub fn new() -> args::ProcResult<Self> {
        Ok(Method{method_args: MethodArgs::default()})
    }
}

/// Deserializer for the method config file.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct MethodArgs {
    /// Events to apply, in order.
    events: Vec<AdjustEvent>,
}
impl Default for MethodArgs {
    fn default() -> Self {
        // Sample script shown by the example command
        MethodArgs{
            events: vec![
                AdjustEvent::Rotate{degrees: 15.0},
                AdjustEvent::Scale{rate: 1.25},
            ],
        }
    }
}

impl adjust::AdjustMethod for Method {
    /// Get the name of the adjust method.
    fn get_method_name(&self) -> String {
        "Script".to_string()
    }

    /// Parse the method config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;

        if self.method_args.events.is_empty() {
            args::err_str("Script method requires at least one event")?;
        }
        for event in self.method_args.events.iter() {
            if let AdjustEvent::Scale{rate} = event {
                if *rate <= 0.0 || rate.is_nan() {
                    args::err_str(&format!("Script scale rate must be positive, got {}", rate))?;
                }
            }
        }

        Ok(())
    }

    /// Apply the scripted events in order.
    /// Returns a `ProcResult` with `()` or an `Err`.
    fn do_adjust(&self, object: &mut scene::Placeable) -> adjust::ProcResult<()> {
        let event_count = self.method_args.events.len();

        for (event_num, event) in self.method_args.events.iter().enumerate() {
            match event {
                AdjustEvent::Rotate{degrees} => {
                    println!("Event {}/{}: rotate {} degrees...", event_num + 1, event_count, degrees);
                    adjust::rotate_about_anchor(object, *degrees)?;
                },
                AdjustEvent::Scale{rate} => {
                    println!("Event {}/{}: scale by {}...", event_num + 1, event_count, rate);
                    adjust::scale_about_anchor(object, *rate)?;
                },
            }
        }

        Ok(())
    }

    /// Serialize the method config for the example command.
    fn example_method_cfg(&self, format: args::Format) -> args::ProcResult<String> {
        match format {
            args::Format::Yaml => Ok(serde_yaml::to_string(&self.method_args)?),
            args::Format::Json => Ok(serde_json::to_string_pretty(&self.method_args)?),
            args::Format::Toml => Ok(toml::to_string_pretty(&self.method_args)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::AdjustMethod;
    use crate::geo_3d::*;
    use crate::scene::{AnchorRecord, Placeable};

    fn registered_object() -> Placeable {
        Placeable{
            name: "lamp".to_string(),
            anchor_point: Point::new(0.0, -0.5, 0.0),
            anchor_normal: GeoVector::yhat(),
            transform: Transform{
                position: Point::new(1.0, 0.5, 0.0),
                rotation: Quaternion::identity(),
                scale: GeoVector::one(),
            },
            anchor: Some(AnchorRecord{
                point: Point::new(1.0, 0.0, 0.0),
                normal: GeoVector::yhat(),
                plane_id: "floor".to_string(),
            }),
        }
    }

    #[test]
    fn events_apply_in_order() {
        let mut scripted = registered_object();
        let method = Method{
            method_args: MethodArgs{
                events: vec![
                    AdjustEvent::Rotate{degrees: 90.0},
                    AdjustEvent::Scale{rate: 2.0},
                ],
            },
        };
        method.do_adjust(&mut scripted).unwrap();

        // The same events applied by hand must land on the same transform
        let mut manual = registered_object();
        adjust::rotate_about_anchor(&mut manual, 90.0).unwrap();
        adjust::scale_about_anchor(&mut manual, 2.0).unwrap();

        assert!(scripted.transform.position.distance(&manual.transform.position) < 1e-4);
        assert!((scripted.transform.scale - manual.transform.scale).norm() < 1e-4);
        // The anchor point survives the whole script
        assert!(scripted.anchor_point_world().distance(&Point::new(1.0, 0.0, 0.0)) < 1e-4);
    }

    #[test]
    fn script_events_round_trip_through_yaml() {
        let yaml = concat!(
            "events:\n",
            "  - rotate:\n",
            "      degrees: -30.0\n",
            "  - scale:\n",
            "      rate: 0.5\n",
        );
        let method_args: MethodArgs = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(method_args.events.len(), 2);
        assert_eq!(method_args.events[0], AdjustEvent::Rotate{degrees: -30.0});
        assert_eq!(method_args.events[1], AdjustEvent::Scale{rate: 0.5});
    }
}
