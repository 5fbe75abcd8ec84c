use crate::{
    raycast,
    scene,
    args,
};
use crate::geo_3d::*;

use serde::{Serialize, Deserialize};

/// Orthographic raycast method struct.
/// Casts a parallel pick ray along the camera view direction, offset to
/// the pick point on the camera plane.
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
        "Orthographic".to_string()
    }

    /// Parse the method config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;
        Ok(())
    }

    /// Build the parallel pick ray and cast it.
    /// Returns a `ProcResult` with the `PlaneHit` or an `Err`.
    fn do_raycast(&self, scene: &scene::Scene, screen: &raycast::ScreenPoint) -> raycast::ProcResult<raycast::PlaneHit> {
        let camera = &scene.camera;

        // Offset the ray origin to the pick point on the camera plane
        let (ndc_x, ndc_y) = camera.to_ndc(screen.x, screen.y);
        let half_height = camera.ortho_half_height;
        let half_width = half_height * camera.aspect();

        let origin = camera.position
            + camera.right() * (ndc_x * half_width)
            + camera.up() * (ndc_y * half_height);

        let ray = Ray::new(origin, camera.forward());

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
