mod proc_errors;
mod cfg;
mod methods;

use serde::{Serialize, Deserialize};

use crate::geo_3d::*;
use crate::scene::Scene;

// Re-export errors
pub use proc_errors::{
    RaycastError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    RaycastArgs,
    RaycastTarget,
};
// Re-export raycast methods
pub use methods::{
    RaycastChoice,
    RaycastMethod,
};

/// A pick point on the screen, in pixels from the bottom-left corner
/// of the viewport.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// A hit on a tracked plane.
/// The output of the raycast stage, input to registration.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaneHit {
    /// Id of the tracked plane that was hit.
    pub plane_id: String,
    /// World-space hit point.
    pub point: Point,
    /// Ray parameter of the hit, in world units along the pick ray.
    pub distance: f32,
}

/// Cast a ray against every tracked plane and return the nearest hit.
/// Every plane is tested, so planes lying behind other geometry are
/// still found. Planes failing the tag filter, hits outside a plane's
/// extents, and hits farther than `max_distance` are skipped.
/// Returns `None` when nothing is hit.
pub fn first_plane_hit(
    scene: &Scene,
    ray: &Ray,
    tag: Option<&str>,
    max_distance: Option<f32>,
) -> Option<PlaneHit> {
    let mut nearest: Option<PlaneHit> = None;

    for tracked in scene.planes.iter() {
        if let Some(tag) = tag {
            if tracked.tag != tag {
                continue;
            }
        }

        let t = match tracked.plane().intersect_ray(ray) {
            Some(t) => t,
            None => continue,
        };
        if let Some(max_distance) = max_distance {
            if t > max_distance {
                continue;
            }
        }

        let point = ray.point_at(t);
        if !tracked.contains(&point) {
            continue;
        }

        match nearest {
            Some(ref hit) if hit.distance <= t => {},
            _ => {
                nearest = Some(PlaneHit{
                    plane_id: tracked.id.clone(),
                    point,
                    distance: t,
                });
            },
        }
    }

    nearest
}

/// Run the raycast stage.
/// Returns a `ProcResult` with the `PlaneHit` or an `Err`.
pub fn do_raycast(raycast_target: &RaycastTarget, scene: &Scene) -> ProcResult<PlaneHit> {
    let raycast_method = &raycast_target.raycast_method;
    let raycast_args = &raycast_target.raycast_args;

    let screen = ScreenPoint{
        x: raycast_args.screen_x,
        y: raycast_args.screen_y,
    };

    println!("Running raycast method: {}...", raycast_method.get_method_name());
    raycast_method.do_raycast(scene, &screen)
}

/// Save a plane hit as JSON.
pub fn save_hit(hit: &PlaneHit, output_path: &str) -> ProcResult<()> {
    println!("Saving hit to {}...", output_path);
    crate::io::write_json(output_path, hit)?;
    Ok(())
}

/// Load a plane hit from JSON.
pub fn load_hit(input_path: &str) -> ProcResult<PlaneHit> {
    println!("Loading hit from {}...", input_path);
    let hit: PlaneHit = crate::io::read_json(input_path)?;
    Ok(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Camera, Scene, TrackedPlane, Viewport};

    fn test_scene(planes: Vec<TrackedPlane>) -> Scene {
        Scene{
            camera: Camera{
                position: Point::new(0.0, 1.0, 0.0),
                orientation: Camera::default_orientation(),
                viewport: Viewport{width: 640.0, height: 480.0},
                fov_y_deg: Camera::default_fov_y_deg(),
                near_clip: Camera::default_near_clip(),
                ortho_half_height: Camera::default_ortho_half_height(),
            },
            planes,
        }
    }

    fn plane_at_z(id: &str, z: f32) -> TrackedPlane {
        TrackedPlane{
            id: id.to_string(),
            tag: TrackedPlane::default_tag(),
            center: Point::new(0.0, 1.0, z),
            normal: -GeoVector::zhat(),
            extents: [2.0, 2.0],
        }
    }

    #[test]
    fn nearest_of_several_planes_wins() {
        let scene = test_scene(vec![plane_at_z("far", 5.0), plane_at_z("near", 2.0)]);
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), GeoVector::zhat());

        let hit = first_plane_hit(&scene, &ray, None, None).unwrap();
        assert_eq!(hit.plane_id, "near");
        assert!((hit.distance - 2.0).abs() < 1e-4);
    }

    #[test]
    fn tag_filter_skips_untagged_planes() {
        let mut near = plane_at_z("near", 2.0);
        near.tag = "virtual_object".to_string();
        let scene = test_scene(vec![near, plane_at_z("far", 5.0)]);
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), GeoVector::zhat());

        // The nearer surface is not an AR plane, so the ray passes through it
        let hit = first_plane_hit(&scene, &ray, Some("ar_plane"), None).unwrap();
        assert_eq!(hit.plane_id, "far");
    }

    #[test]
    fn hits_outside_extents_miss() {
        let mut small = plane_at_z("small", 2.0);
        small.extents = [0.1, 0.1];
        let scene = test_scene(vec![small]);
        let ray = Ray::new(Point::new(1.0, 1.0, 0.0), GeoVector::zhat());

        assert!(first_plane_hit(&scene, &ray, None, None).is_none());
    }

    #[test]
    fn max_distance_discards_far_hits() {
        let scene = test_scene(vec![plane_at_z("far", 5.0)]);
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), GeoVector::zhat());

        assert!(first_plane_hit(&scene, &ray, None, Some(3.0)).is_none());
        assert!(first_plane_hit(&scene, &ray, None, Some(6.0)).is_some());
    }

    #[test]
    fn empty_scene_misses() {
        let scene = test_scene(Vec::new());
        let ray = Ray::new(Point::zero(), GeoVector::zhat());
        assert!(first_plane_hit(&scene, &ray, None, None).is_none());
    }
}
