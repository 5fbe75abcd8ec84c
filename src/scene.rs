mod proc_errors;

use serde::{Serialize, Deserialize};
use itertools::Itertools;

use crate::geo_3d::*;

// Re-export errors
pub use proc_errors::{
    SceneError,
    ProcResult,
    err_str,
};

/// Viewport size in pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// The capture camera of a tracked scene.
/// Position and orientation define the camera frame:
/// local x is right, local y is up, local z is the view direction.
/// Screen coordinates are pixels with the origin at the bottom-left
/// corner of the viewport.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Camera {
    pub position: Point,
    #[serde(default = "Camera::default_orientation")]
    pub orientation: Quaternion,
    pub viewport: Viewport,
    #[serde(default = "Camera::default_fov_y_deg", alias = "fov")]
    pub fov_y_deg: f32,
    #[serde(default = "Camera::default_near_clip", alias = "near")]
    pub near_clip: f32,
    #[serde(default = "Camera::default_ortho_half_height")]
    pub ortho_half_height: f32,
}
impl Camera {
    pub fn default_orientation() -> Quaternion {
        Quaternion::identity()
    }
    pub fn default_fov_y_deg() -> f32 {
        60.0
    }
    pub fn default_near_clip() -> f32 {
        0.1
    }
    pub fn default_ortho_half_height() -> f32 {
        1.0
    }

    /// Get the camera right direction in world space.
    pub fn right(&self) -> GeoVector {
        self.orientation.rotate(&GeoVector::xhat())
    }

    /// Get the camera up direction in world space.
    pub fn up(&self) -> GeoVector {
        self.orientation.rotate(&GeoVector::yhat())
    }

    /// Get the camera view direction in world space.
    pub fn forward(&self) -> GeoVector {
        self.orientation.rotate(&GeoVector::zhat())
    }

    /// Map a pixel pick point to normalized device coordinates in [-1, 1].
    pub fn to_ndc(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            2.0 * screen_x / self.viewport.width - 1.0,
            2.0 * screen_y / self.viewport.height - 1.0,
        )
    }

    /// Get the viewport aspect ratio (width over height).
    pub fn aspect(&self) -> f32 {
        self.viewport.width / self.viewport.height
    }
}

/// A detected surface in the scene.
/// The extents bound the detected area within the infinite plane,
/// measured along the plane's derived tangent basis.
// TODO: support an explicit in-plane orientation so extents boxes can
// spin around the normal instead of following the derived basis.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrackedPlane {
    pub id: String,
    #[serde(default = "TrackedPlane::default_tag")]
    pub tag: String,
    pub center: Point,
    pub normal: GeoVector,
    /// In-plane half-extents along the tangent basis.
    pub extents: [f32; 2],
}
impl TrackedPlane {
    pub fn default_tag() -> String {
        "ar_plane".to_string()
    }

    /// Get the infinite plane through the center with the tracked normal.
    pub fn plane(&self) -> Plane {
        Plane::from_normal_and_point(self.normal, self.center)
    }

    /// Check if a point on the plane lies within the tracked extents.
    pub fn contains(&self, point: &Point) -> bool {
        let (u, v) = self.plane().tangent_basis();
        let offset = *point - self.center;
        offset.dot(&u).abs() <= self.extents[0] && offset.dot(&v).abs() <= self.extents[1]
    }
}

/// A tracked scene: the capture camera and the detected planes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Scene {
    pub camera: Camera,
    #[serde(default)]
    pub planes: Vec<TrackedPlane>,
}
impl Scene {
    /// Load a scene from a config file and validate it.
    /// Plane normals are normalized on the way in.
    pub fn load(path: &str) -> ProcResult<Self> {
        let mut scene: Scene = crate::io::read_cfg_file(path)?;
        scene.validate()?;

        // Normal vectors must be unit length before any rotation math
        for plane in scene.planes.iter_mut() {
            plane.normal = plane.normal.normalize();
        }

        Ok(scene)
    }

    /// Check the scene invariants: unique plane ids, usable normals and
    /// extents, a usable camera.
    pub fn validate(&self) -> ProcResult<()> {
        let duplicates: Vec<&String> = self.planes.iter().map(|p| &p.id).duplicates().collect();
        if !duplicates.is_empty() {
            err_str(&format!("Duplicate plane ids in scene: {:?}", duplicates))?;
        }

        for plane in self.planes.iter() {
            if plane.normal.has_nan() || plane.normal.norm() == 0.0 {
                err_str(&format!("Plane \"{}\" has an unusable normal {}", plane.id, plane.normal))?;
            }
            if plane.extents[0] < 0.0 || plane.extents[1] < 0.0 {
                err_str(&format!("Plane \"{}\" has negative extents", plane.id))?;
            }
        }

        if self.camera.viewport.width <= 0.0 || self.camera.viewport.height <= 0.0 {
            err_str("Camera viewport must have positive size")?;
        }
        if self.camera.near_clip <= 0.0 {
            err_str("Camera near clip must be positive")?;
        }

        Ok(())
    }

    /// Get a tracked plane by id.
    pub fn plane_by_id(&self, id: &str) -> Option<&TrackedPlane> {
        self.planes.iter().find(|p| p.id == id)
    }
}

/// A placeable object: the virtual object being put onto a tracked plane.
/// The anchor point and anchor normal are in the object's local space.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Placeable {
    pub name: String,
    pub anchor_point: Point,
    pub anchor_normal: GeoVector,
    #[serde(default = "Transform::identity")]
    pub transform: Transform,
    /// World-space anchor state. Written by registration, read by the
    /// adjust operations.
    #[serde(default)]
    pub anchor: Option<AnchorRecord>,
}
impl Placeable {
    /// Load a placeable object from a config file.
    /// The anchor normal is normalized on the way in.
    pub fn load(path: &str) -> ProcResult<Self> {
        let mut object: Placeable = crate::io::read_cfg_file(path)?;

        if object.anchor_normal.has_nan() || object.anchor_normal.norm() == 0.0 {
            err_str(&format!("Object \"{}\" has an unusable anchor normal {}",
                object.name, object.anchor_normal))?;
        }
        // Normal vectors must be unit length before any rotation math
        object.anchor_normal = object.anchor_normal.normalize();

        Ok(object)
    }

    /// Save a placed object as JSON.
    pub fn save(&self, path: &str) -> ProcResult<()> {
        crate::io::write_json(path, self)?;
        Ok(())
    }

    /// Get the world-space position of the local anchor point.
    pub fn anchor_point_world(&self) -> Point {
        self.transform.transform_point(&self.anchor_point)
    }

    /// Get the world-space direction of the local anchor normal.
    pub fn anchor_normal_world(&self) -> GeoVector {
        self.transform.transform_direction(&self.anchor_normal)
    }
}

/// World-space anchor state attached to a placed object.
/// Set once per registration and overwritten on re-registration.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnchorRecord {
    /// World anchor point (the registration hit point).
    pub point: Point,
    /// World surface normal at the anchor.
    pub normal: GeoVector,
    /// Id of the tracked plane the object is anchored to.
    pub plane_id: String,
}
