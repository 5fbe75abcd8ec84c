use crate::{
    raycast,
    scene,
    args,
};
use crate::geo_3d::*;

use serde::{Serialize, Deserialize};

/// Pinhole raycast method struct.
/// Casts a perspective pick ray from the camera position through the
/// pick point unprojected onto the near clip plane.
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
    /// Only planes carrying this tag are eligible. Null disables the filter.
    #[serde(default = "MethodArgs::default_tag")]
    tag: Option<String>,
    /// Discard hits farther than this along the ray. Null means unbounded.
    #[serde(default = "MethodArgs::default_max_distance")]
    max_distance: Option<f32>,
}
impl MethodArgs {
    pub fn default_tag() -> Option<String> {
        Some("ar_plane".to_string())
    }
    pub fn default_max_distance() -> Option<f32> {
        None
    }
}
impl Default for MethodArgs {
    fn default() -> Self {
        MethodArgs{
            tag: MethodArgs::default_tag(),
            max_distance: MethodArgs::default_max_distance(),
        }
    }
}

impl raycast::RaycastMethod for Method {
    /// Get the name of the raycast method.
    fn get_method_name(&self) -> String {
        "Pinhole".to_string()
    }

    /// Parse the method config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;
        Ok(())
    }

    /// Build the perspective pick ray and cast it.
    /// Returns a `ProcResult` with the `PlaneHit` or an `Err`.
    fn do_raycast(&self, scene: &scene::Scene, screen: &raycast::ScreenPoint) -> raycast::ProcResult<raycast::PlaneHit> {
        let camera = &scene.camera;

        // Unproject the pick point onto the near clip plane
        let (ndc_x, ndc_y) = camera.to_ndc(screen.x, screen.y);
        let half_height = camera.near_clip * (camera.fov_y_deg.to_radians() / 2.0).tan();
        let half_width = half_height * camera.aspect();

        let near_point = camera.position
            + camera.forward() * camera.near_clip
            + camera.right() * (ndc_x * half_width)
            + camera.up() * (ndc_y * half_height);

        // The pick ray runs from the camera position through the near point
        let ray = Ray::new(camera.position, near_point - camera.position);

        match raycast::first_plane_hit(scene, &ray, self.method_args.tag.as_deref(), self.method_args.max_distance) {
            Some(hit) => Ok(hit),
            None => raycast::err_str("Pick ray did not hit any tracked plane"),
        }
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
    use crate::raycast::RaycastMethod;
    use crate::scene::{Camera, Scene, TrackedPlane, Viewport};

    fn facing_scene() -> Scene {
        // Camera at the origin looking down +z at a wall three units away
        Scene{
            camera: Camera{
                position: Point::zero(),
                orientation: Camera::default_orientation(),
                viewport: Viewport{width: 640.0, height: 480.0},
                fov_y_deg: 60.0,
                near_clip: 0.1,
                ortho_half_height: Camera::default_ortho_half_height(),
            },
            planes: vec![TrackedPlane{
                id: "wall".to_string(),
                tag: TrackedPlane::default_tag(),
                center: Point::new(0.0, 0.0, 3.0),
                normal: -GeoVector::zhat(),
                extents: [5.0, 5.0],
            }],
        }
    }

    #[test]
    fn center_pick_hits_straight_ahead() {
        let scene = facing_scene();
        let method = Method::new().unwrap();

        let hit = method.do_raycast(&scene, &raycast::ScreenPoint{x: 320.0, y: 240.0}).unwrap();
        assert_eq!(hit.plane_id, "wall");
        assert!(hit.point.distance(&Point::new(0.0, 0.0, 3.0)) < 1e-4);
    }

    #[test]
    fn off_center_pick_leans_toward_the_pick() {
        let scene = facing_scene();
        let method = Method::new().unwrap();

        let hit = method.do_raycast(&scene, &raycast::ScreenPoint{x: 480.0, y: 360.0}).unwrap();
        assert!(hit.point.x > 0.0);
        assert!(hit.point.y > 0.0);
    }

    #[test]
    fn miss_reports_an_error() {
        let mut scene = facing_scene();
        scene.planes.clear();
        let method = Method::new().unwrap();

        assert!(method.do_raycast(&scene, &raycast::ScreenPoint{x: 320.0, y: 240.0}).is_err());
    }
}
