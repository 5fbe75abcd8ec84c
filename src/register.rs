mod proc_errors;
mod cfg;
mod methods;

use crate::geo_3d::*;
use crate::raycast::PlaneHit;
use crate::scene::{
    AnchorRecord,
    Placeable,
    Scene,
    TrackedPlane,
};

// Re-export errors
pub use proc_errors::{
    RegisterError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    RegisterArgs,
    RegisterTarget,
};
// Re-export register methods
pub use methods::{
    RegisterChoice,
    RegisterMethod,
};

/// A solved rigid registration: the rotation and translation that carry
/// the object's local anchor onto the hit surface.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub rotation: Quaternion,
    pub translation: GeoVector,
}

/// Solve the registration mapping the object's local anchor point and
/// normal onto a world hit point and surface normal.
/// The rotation is the minimal arc carrying the local anchor normal onto
/// the surface normal; it replaces the object's current rotation rather
/// than composing with it. The translation then carries the rotated
/// anchor point onto the hit point.
pub fn solve_registration(
    object: &Placeable,
    hit_point: Point,
    surface_normal: GeoVector,
    epsilon: f32,
) -> Registration {
    // Normal vectors must be unit length before any rotation math
    let local_normal = object.anchor_normal.normalize();
    let surface_normal = surface_normal.normalize();

    let rotation = Quaternion::rotation_arc_with_epsilon(&local_normal, &surface_normal, epsilon);

    // World position of the anchor point under the new rotation
    let rotated = Transform{
        position: object.transform.position,
        rotation,
        scale: object.transform.scale,
    };
    let anchor_world = rotated.transform_point(&object.anchor_point);

    Registration{
        rotation,
        translation: hit_point - anchor_world,
    }
}

/// Apply a registration onto a tracked plane and store the anchor record.
/// The record overwrites any previous registration.
pub fn register_object(
    object: &mut Placeable,
    hit: &PlaneHit,
    plane: &TrackedPlane,
    epsilon: f32,
) {
    let surface_normal = plane.normal.normalize();
    let registration = solve_registration(object, hit.point, surface_normal, epsilon);

    object.transform.rotation = registration.rotation;
    object.transform.position += registration.translation;

    object.anchor = Some(AnchorRecord{
        point: hit.point,
        normal: surface_normal,
        plane_id: plane.id.clone(),
    });
}

/// Run the register stage on a loaded object.
/// Returns a `ProcResult` with `()` or an `Err`.
pub fn do_register(
    register_target: &RegisterTarget,
    object: &mut Placeable,
    hit: &PlaneHit,
    scene: &Scene,
) -> ProcResult<()> {
    let register_method = &register_target.register_method;

    println!("Running registration method: {}...", register_method.get_method_name());
    register_method.do_register(object, hit, scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_object() -> Placeable {
        // Bottom-center anchor, object "up" as the anchor normal
        Placeable{
            name: "lamp".to_string(),
            anchor_point: Point::new(0.0, -0.5, 0.0),
            anchor_normal: GeoVector::yhat(),
            transform: Transform::identity(),
            anchor: None,
        }
    }

    fn test_plane(id: &str, normal: GeoVector) -> TrackedPlane {
        TrackedPlane{
            id: id.to_string(),
            tag: crate::scene::TrackedPlane::default_tag(),
            center: Point::zero(),
            normal,
            extents: [10.0, 10.0],
        }
    }

    fn test_hit(plane_id: &str, point: Point) -> PlaneHit {
        PlaneHit{
            plane_id: plane_id.to_string(),
            point,
            distance: 1.0,
        }
    }

    #[test]
    fn anchor_lands_on_the_hit_point() {
        let mut object = test_object();
        let plane = test_plane("floor", GeoVector::new(1.0, 1.0, 0.0));
        let hit = test_hit("floor", Point::new(2.0, 1.0, 3.0));

        register_object(&mut object, &hit, &plane, 1e-5);

        assert!(object.anchor_point_world().distance(&hit.point) < 1e-4);
    }

    #[test]
    fn anchor_normal_aligns_with_the_surface() {
        let mut object = test_object();
        let plane = test_plane("wall", GeoVector::new(0.3, 0.0, -1.0));
        let hit = test_hit("wall", Point::new(0.0, 1.0, 5.0));

        register_object(&mut object, &hit, &plane, 1e-5);

        let aligned = object.anchor_normal_world();
        assert!((aligned - plane.normal.normalize()).norm() < 1e-4);
    }

    #[test]
    fn rotation_is_replaced_not_composed() {
        let mut object = test_object();
        // A stale orientation from an earlier placement must not leak in
        object.transform.rotation =
            Quaternion::from_axis_angle(&GeoVector::xhat(), 1.2);
        let plane = test_plane("floor", GeoVector::yhat());
        let hit = test_hit("floor", Point::new(1.0, 0.0, 1.0));

        register_object(&mut object, &hit, &plane, 1e-5);

        assert!((object.anchor_normal_world() - GeoVector::yhat()).norm() < 1e-4);
        assert!(object.anchor_point_world().distance(&hit.point) < 1e-4);
    }

    #[test]
    fn scaled_objects_register_exactly() {
        let mut object = test_object();
        object.transform.scale = GeoVector::new(2.0, 2.0, 2.0);
        let plane = test_plane("floor", GeoVector::yhat());
        let hit = test_hit("floor", Point::new(-1.0, 0.0, 2.0));

        register_object(&mut object, &hit, &plane, 1e-5);

        assert!(object.anchor_point_world().distance(&hit.point) < 1e-4);
    }

    #[test]
    fn re_registration_overwrites_the_record() {
        let mut object = test_object();
        let floor = test_plane("floor", GeoVector::yhat());
        let wall = test_plane("wall", GeoVector::xhat());

        register_object(&mut object, &test_hit("floor", Point::zero()), &floor, 1e-5);
        register_object(&mut object, &test_hit("wall", Point::new(0.0, 2.0, 0.0)), &wall, 1e-5);

        let anchor = object.anchor.as_ref().unwrap();
        assert_eq!(anchor.plane_id, "wall");
        assert!((anchor.normal - GeoVector::xhat()).norm() < 1e-4);
        assert!(object.anchor_point_world().distance(&Point::new(0.0, 2.0, 0.0)) < 1e-4);
    }
}
