use crate::{
    raycast,
    register,
    scene,
    args,
};

use serde::{Serialize, Deserialize};

/// Shortest-arc registration method struct.
/// Aligns the object's local anchor normal onto the hit plane's normal
/// with the minimal-angle rotation, then translates the anchor point
/// onto the hit point.
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
    /// Alignment tolerance for the degenerate rotation cases
    /// (already-aligned and opposed normals).
    #[serde(default = "MethodArgs::default_epsilon", alias = "eps")]
    epsilon: f32,
}
impl MethodArgs {
    pub fn default_epsilon() -> f32 {
        1e-5
    }
}
impl Default for MethodArgs {
    fn default() -> Self {
        MethodArgs{
            epsilon: MethodArgs::default_epsilon(),
        }
    }
}

impl register::RegisterMethod for Method {
    /// Get the name of the registration method.
    fn get_method_name(&self) -> String {
        "Shortest Arc".to_string()
    }

    /// Parse the method config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;
        if self.method_args.epsilon <= 0.0 || self.method_args.epsilon.is_nan() {
            args::err_str("Shortest-arc epsilon must be positive")?;
        }
        Ok(())
    }

    /// Register the object onto the plane referenced by the hit.
    /// Returns a `ProcResult` with `()` or an `Err`.
    fn do_register(&self, object: &mut scene::Placeable, hit: &raycast::PlaneHit, scene: &scene::Scene) -> register::ProcResult<()> {
        let plane = match scene.plane_by_id(&hit.plane_id) {
            Some(plane) => plane,
            None => register::err_str(&format!("Hit references unknown plane \"{}\"", hit.plane_id))?,
        };

        register::register_object(object, hit, plane, self.method_args.epsilon);

        if object.transform.has_nan() {
            register::err_str(&format!("BUG! Registration of \"{}\" produced NaN ({})",
                object.name, object.transform))?;
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
    use crate::geo_3d::*;
    use crate::register::RegisterMethod;
    use crate::scene::{Camera, Placeable, Scene, TrackedPlane, Viewport};

    fn floor_scene() -> Scene {
        Scene{
            camera: Camera{
                position: Point::new(0.0, 1.5, 0.0),
                orientation: Camera::default_orientation(),
                viewport: Viewport{width: 640.0, height: 480.0},
                fov_y_deg: Camera::default_fov_y_deg(),
                near_clip: Camera::default_near_clip(),
                ortho_half_height: Camera::default_ortho_half_height(),
            },
            planes: vec![TrackedPlane{
                id: "floor".to_string(),
                tag: TrackedPlane::default_tag(),
                center: Point::zero(),
                normal: GeoVector::yhat(),
                extents: [5.0, 5.0],
            }],
        }
    }

    fn test_object() -> Placeable {
        Placeable{
            name: "lamp".to_string(),
            anchor_point: Point::new(0.0, -0.5, 0.0),
            anchor_normal: GeoVector::yhat(),
            transform: Transform::identity(),
            anchor: None,
        }
    }

    #[test]
    fn registers_against_the_scene_plane() {
        let scene = floor_scene();
        let mut object = test_object();
        let hit = raycast::PlaneHit{
            plane_id: "floor".to_string(),
            point: Point::new(1.0, 0.0, 2.0),
            distance: 3.0,
        };

        let method = Method::new().unwrap();
        method.do_register(&mut object, &hit, &scene).unwrap();

        assert!(object.anchor_point_world().distance(&hit.point) < 1e-4);
        assert_eq!(object.anchor.as_ref().unwrap().plane_id, "floor");
    }

    #[test]
    fn unknown_plane_is_an_error() {
        let scene = floor_scene();
        let mut object = test_object();
        let hit = raycast::PlaneHit{
            plane_id: "ceiling".to_string(),
            point: Point::zero(),
            distance: 1.0,
        };

        let method = Method::new().unwrap();
        assert!(method.do_register(&mut object, &hit, &scene).is_err());
    }
}
