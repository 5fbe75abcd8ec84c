use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
};
use std::fmt;
use serde::{Serialize, Deserialize};

/// Angle type (alias for f32). Radians.
pub type Angle = f32;

/// A point in 3D space.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Point{x, y, z}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;

        (dx*dx + dy*dy + dz*dz).sqrt()
    }

    /// Check if any of the coordinates are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<GeoVector> for Point {
    fn add_assign(&mut self, rhs: GeoVector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Sub<GeoVector> for Point {
    type Output = Self;

    fn sub(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<GeoVector> for Point {
    fn sub_assign(&mut self, rhs: GeoVector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl std::convert::From<GeoVector> for Point {
    fn from(vector: GeoVector) -> Self {
        Point{
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}

/// A vector in 3D space.
/// Used for directions, normals, and translations.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GeoVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Create a new all-ones vector.
    pub fn one() -> Self {
        GeoVector{x: 1.0, y: 1.0, z: 1.0}
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the component-wise product of two vectors.
    pub fn hadamard(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f32 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f32 {
        self.norm_sq().sqrt()
    }

    /// Get the angle between two vectors.
    pub fn angle_to(&self, other: &GeoVector) -> Angle {
        let dot = self.dot(other);
        let mag = self.norm() * other.norm();
        // Catch float errors when vectors are exactly aligned
        if (dot / mag) > 1.0 {
            return 0.0;
        }
        if (dot / mag) < -1.0 {
            return std::f32::consts::PI;
        }
        (dot / mag).acos()
    }

    /// Get the vector projection of `self` onto `other`.
    pub fn proj_onto(&self, other: &GeoVector) -> GeoVector {
        let other = other.normalize();
        other * self.dot(&other)
    }

    /// Get the vector rejection of `self` onto `other`.
    pub fn rej_onto(&self, other: &GeoVector) -> GeoVector {
        *self - self.proj_onto(other)
    }

    /// Get an arbitrary unit vector perpendicular to this one.
    /// Projects zhat out of this vector, falling back to xhat when the
    /// vector is close to the z axis.
    pub fn perpendicular(&self) -> GeoVector {
        let normal = self.normalize();
        let zhat = GeoVector::zhat();
        if normal.dot(&zhat).abs() < 0.999 {
            zhat.rej_onto(&normal).normalize()
        } else {
            GeoVector::xhat().rej_onto(&normal).normalize()
        }
    }

    /// Rotate around another vector by an angle.
    pub fn rotate_around(&self, axis: &GeoVector, angle: Angle) -> GeoVector {
        let c = angle.cos();
        let s = angle.sin();
        let cross = axis.cross(self);

        *self * c + cross * s + *axis * axis.dot(self) * (1.0 - c)
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        GeoVector{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        GeoVector{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 1.0}
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl AddAssign for GeoVector {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl SubAssign for GeoVector {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Mul<GeoVector> for f32 {
    type Output = GeoVector;

    fn mul(self, other: GeoVector) -> GeoVector {
        GeoVector{
            x: self * other.x,
            y: self * other.y,
            z: self * other.z,
        }
    }
}
impl Mul<f32> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f32) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl MulAssign<f32> for GeoVector {
    fn mul_assign(&mut self, other: f32) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
impl Div<f32> for GeoVector {
    type Output = GeoVector;

    fn div(self, other: f32) -> GeoVector {
        GeoVector{
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
impl DivAssign<f32> for GeoVector {
    fn div_assign(&mut self, other: f32) {
        self.x /= other;
        self.y /= other;
        self.z /= other;
    }
}
impl std::ops::Neg for GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        GeoVector{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl std::convert::From<Point> for GeoVector {
    fn from(point: Point) -> Self {
        GeoVector{
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

/// Tolerance below which two unit directions count as aligned (or opposed)
/// when constructing an arc rotation.
const ARC_EPSILON: f32 = 1e-5;

/// A rotation in 3D space, stored as a unit quaternion.
/// `x`, `y`, `z` are the vector part, `w` is the scalar part.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}
impl Quaternion {
    /// Create the identity rotation.
    pub fn identity() -> Self {
        Quaternion{x: 0.0, y: 0.0, z: 0.0, w: 1.0}
    }

    /// Create a rotation of `angle` around `axis`.
    /// The axis is normalized internally.
    pub fn from_axis_angle(axis: &GeoVector, angle: Angle) -> Self {
        let axis = axis.normalize();
        let half = angle / 2.0;
        let s = half.sin();
        Quaternion{
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Create the minimal-angle rotation mapping `from` onto `to`.
    /// Both directions are normalized internally.
    /// Aligned inputs give the identity; opposed inputs give a half turn
    /// around an arbitrary perpendicular axis.
    pub fn rotation_arc(from: &GeoVector, to: &GeoVector) -> Self {
        Quaternion::rotation_arc_with_epsilon(from, to, ARC_EPSILON)
    }

    /// Create the minimal-angle rotation mapping `from` onto `to`,
    /// with an explicit alignment tolerance for the degenerate cases.
    pub fn rotation_arc_with_epsilon(from: &GeoVector, to: &GeoVector, epsilon: f32) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        let dot = from.dot(&to);

        if dot > 1.0 - epsilon {
            return Quaternion::identity();
        }
        if dot < -1.0 + epsilon {
            // Opposed directions leave the axis underdetermined, so pick one
            return Quaternion::from_axis_angle(&from.perpendicular(), std::f32::consts::PI);
        }

        // Half-angle construction: (cross, 1 + dot), normalized
        let axis = from.cross(&to);
        Quaternion{
            x: axis.x,
            y: axis.y,
            z: axis.z,
            w: 1.0 + dot,
        }.normalize()
    }

    /// Get the magnitude of the quaternion.
    pub fn norm(&self) -> f32 {
        (self.x*self.x + self.y*self.y + self.z*self.z + self.w*self.w).sqrt()
    }

    /// Normalize and return a new quaternion.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        Quaternion{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
            w: self.w / mag,
        }
    }

    /// Get the inverse rotation (conjugate; assumes unit length).
    pub fn conjugate(&self) -> Self {
        Quaternion{
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(&self, v: &GeoVector) -> GeoVector {
        let qv = GeoVector::new(self.x, self.y, self.z);
        let t = qv.cross(v) * 2.0;
        *v + t * self.w + qv.cross(&t)
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }
}
impl Mul for Quaternion {
    type Output = Self;

    // Hamilton product: self applied after other
    fn mul(self, other: Self) -> Self {
        Quaternion{
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        }
    }
}
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*}; {:.*})",
            precision, self.x, precision, self.y, precision, self.z, precision, self.w)
    }
}

/// A ray in 3D space.
/// Contains an origin point and a unit direction.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: GeoVector,
}
impl Ray {
    /// Create a new ray. The direction is normalized internally.
    pub fn new(origin: Point, direction: GeoVector) -> Self {
        Ray{origin, direction: direction.normalize()}
    }

    /// Get the point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Point {
        self.origin + self.direction * t
    }
}
impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray: origin={}, direction={}", self.origin, self.direction)
    }
}

/// Tolerance below which a ray counts as parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane in 3D space.
/// Contains a normal vector and an offset.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Plane {
    normal: GeoVector,
    pub offset: f32,
}
impl Plane {
    /// Create a new plane.
    pub fn from_normal_and_offset(normal: GeoVector, offset: f32) -> Self {
        let normal = normal.normalize();
        Plane{normal, offset}
    }

    /// Create a new plane from a normal vector and a point.
    pub fn from_normal_and_point(normal: GeoVector, point: Point) -> Self {
        let normal = normal.normalize();
        let offset = normal.dot(&point.into());
        Plane{normal, offset}
    }

    /// Get the normal vector of the plane. Guaranteed to be normalized.
    pub fn get_normal(&self) -> GeoVector {
        self.normal
    }

    /// Get the signed distance from a point to the plane.
    pub fn distance_to_point(&self, point: &Point) -> f32 {
        self.normal.dot(&(*point).into()) - self.offset
    }

    /// Get the projection of a point onto the plane.
    pub fn project_point(&self, point: &Point) -> Point {
        *point - self.normal * self.distance_to_point(point)
    }

    /// Intersect a ray with the plane.
    /// Returns the ray parameter of the intersection,
    /// or `None` when the ray is parallel to the plane or the
    /// intersection lies behind the ray origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(&ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (self.offset - self.normal.dot(&ray.origin.into())) / denom;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Get a deterministic orthonormal in-plane basis `(u, v)`.
    pub fn tangent_basis(&self) -> (GeoVector, GeoVector) {
        let u = self.normal.perpendicular();
        let v = self.normal.cross(&u).normalize();
        (u, v)
    }
}
impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane: normal={}, offset={}", self.normal, self.offset)
    }
}

/// A rigid transform with scale: position + rotation + scale.
/// Maps local-space coordinates to world space as scale, then rotate,
/// then translate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Transform {
    #[serde(default = "Transform::default_position")]
    pub position: Point,
    #[serde(default = "Transform::default_rotation")]
    pub rotation: Quaternion,
    #[serde(default = "Transform::default_scale")]
    pub scale: GeoVector,
}
impl Transform {
    pub fn default_position() -> Point {
        Point::zero()
    }
    pub fn default_rotation() -> Quaternion {
        Quaternion::identity()
    }
    pub fn default_scale() -> GeoVector {
        GeoVector::one()
    }

    /// Create an identity transform.
    pub fn identity() -> Self {
        Transform{
            position: Transform::default_position(),
            rotation: Transform::default_rotation(),
            scale: Transform::default_scale(),
        }
    }

    /// Map a local-space point to world space.
    pub fn transform_point(&self, local: &Point) -> Point {
        let scaled = GeoVector::from(*local).hadamard(&self.scale);
        self.position + self.rotation.rotate(&scaled)
    }

    /// Map a local-space direction to world space.
    /// Rotation only -- directions are not scaled or translated.
    pub fn transform_direction(&self, local: &GeoVector) -> GeoVector {
        self.rotation.rotate(local)
    }

    /// Rotate the transform around a world-space center point and axis.
    /// The center is a fixed point of the operation.
    pub fn rotate_around(&mut self, center: Point, axis: &GeoVector, angle: Angle) {
        let spin = Quaternion::from_axis_angle(axis, angle);
        self.position = center + spin.rotate(&(self.position - center));
        self.rotation = (spin * self.rotation).normalize();
    }

    /// Scale the transform around a world-space center point.
    /// The center is a fixed point of the operation: the position moves
    /// toward or away from it by the rate.
    pub fn scale_around(&mut self, center: Point, rate: f32) {
        self.position = center + (self.position - center) * rate;
        self.scale *= rate;
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.position.has_nan() || self.rotation.has_nan() || self.scale.has_nan()
    }
}
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform: position={}, rotation={}, scale={}",
            self.position, self.rotation, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, FRAC_PI_2};

    fn assert_vec_close(a: &GeoVector, b: &GeoVector) {
        assert!((*a - *b).norm() < 1e-4, "{} != {}", a, b);
    }

    fn assert_point_close(a: &Point, b: &Point) {
        assert!(a.distance(b) < 1e-4, "{} != {}", a, b);
    }

    #[test]
    fn axis_angle_quarter_turn() {
        let spin = Quaternion::from_axis_angle(&GeoVector::zhat(), FRAC_PI_2);
        assert_vec_close(&spin.rotate(&GeoVector::xhat()), &GeoVector::yhat());
    }

    #[test]
    fn quaternion_product_composes() {
        let quarter = Quaternion::from_axis_angle(&GeoVector::zhat(), FRAC_PI_2);
        let half = Quaternion::from_axis_angle(&GeoVector::zhat(), PI);
        let composed = quarter * quarter;
        assert_vec_close(
            &composed.rotate(&GeoVector::xhat()),
            &half.rotate(&GeoVector::xhat()),
        );
    }

    #[test]
    fn rotation_arc_maps_from_onto_to() {
        let from = GeoVector::new(0.3, -1.2, 0.4);
        let to = GeoVector::new(-0.8, 0.1, 2.0);
        let arc = Quaternion::rotation_arc(&from, &to);
        assert!((arc.norm() - 1.0).abs() < 1e-4);
        assert_vec_close(&arc.rotate(&from.normalize()), &to.normalize());
    }

    #[test]
    fn rotation_arc_angle_is_minimal() {
        let from = GeoVector::new(1.0, 0.5, 0.0);
        let to = GeoVector::new(-0.2, 1.0, 0.7);
        let arc = Quaternion::rotation_arc(&from, &to);
        // The arc angle equals the angle between the directions
        let arc_angle = 2.0 * arc.w.clamp(-1.0, 1.0).acos();
        assert!((arc_angle - from.angle_to(&to)).abs() < 1e-4);
    }

    #[test]
    fn rodrigues_and_quaternion_rotation_agree() {
        let v = GeoVector::new(1.0, 2.0, -0.5);
        let axis = GeoVector::new(0.2, 1.0, 0.3).normalize();
        let angle = 1.1;
        let direct = v.rotate_around(&axis, angle);
        let via_quat = Quaternion::from_axis_angle(&axis, angle).rotate(&v);
        assert_vec_close(&direct, &via_quat);
    }

    #[test]
    fn conjugate_undoes_the_rotation() {
        let spin = Quaternion::from_axis_angle(&GeoVector::new(0.3, -0.4, 1.0), 0.8);
        let v = GeoVector::new(2.0, -1.0, 0.5);
        assert_vec_close(&spin.conjugate().rotate(&spin.rotate(&v)), &v);
    }

    #[test]
    fn rotation_arc_aligned_is_identity() {
        let dir = GeoVector::new(0.0, 2.0, 0.0);
        let arc = Quaternion::rotation_arc(&dir, &dir);
        assert_vec_close(&arc.rotate(&GeoVector::xhat()), &GeoVector::xhat());
    }

    #[test]
    fn rotation_arc_opposed_is_half_turn() {
        let from = GeoVector::yhat();
        let to = -GeoVector::yhat();
        let arc = Quaternion::rotation_arc(&from, &to);
        assert!((arc.norm() - 1.0).abs() < 1e-4);
        assert_vec_close(&arc.rotate(&from), &to);
    }

    #[test]
    fn rotation_arc_opposed_near_z_axis() {
        // Exercises the xhat fallback in perpendicular()
        let from = GeoVector::zhat();
        let to = -GeoVector::zhat();
        let arc = Quaternion::rotation_arc(&from, &to);
        assert_vec_close(&arc.rotate(&from), &to);
    }

    #[test]
    fn perpendicular_is_unit_and_orthogonal() {
        for dir in [
            GeoVector::new(0.3, 0.7, -0.2),
            GeoVector::zhat(),
            -GeoVector::zhat(),
            GeoVector::xhat(),
        ] {
            let perp = dir.perpendicular();
            assert!((perp.norm() - 1.0).abs() < 1e-4);
            assert!(perp.dot(&dir.normalize()).abs() < 1e-4);
        }
    }

    #[test]
    fn ray_plane_hit_ahead() {
        let plane = Plane::from_normal_and_point(GeoVector::yhat(), Point::zero());
        let ray = Ray::new(Point::new(1.0, 2.0, 3.0), -GeoVector::yhat());
        let t = plane.intersect_ray(&ray).unwrap();
        assert_point_close(&ray.point_at(t), &Point::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn ray_plane_miss_parallel() {
        let plane = Plane::from_normal_and_point(GeoVector::yhat(), Point::zero());
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), GeoVector::xhat());
        assert!(plane.intersect_ray(&ray).is_none());
    }

    #[test]
    fn ray_plane_miss_behind() {
        let plane = Plane::from_normal_and_point(GeoVector::yhat(), Point::zero());
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), GeoVector::yhat());
        assert!(plane.intersect_ray(&ray).is_none());
    }

    #[test]
    fn plane_distance_and_projection() {
        let plane = Plane::from_normal_and_offset(GeoVector::yhat(), 1.0);
        let point = Point::new(0.0, 3.0, 2.0);
        assert!((plane.distance_to_point(&point) - 2.0).abs() < 1e-4);
        assert_point_close(&plane.project_point(&point), &Point::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn tangent_basis_spans_the_plane() {
        let plane = Plane::from_normal_and_point(GeoVector::new(0.2, 0.9, -0.1), Point::zero());
        let (u, v) = plane.tangent_basis();
        assert!(u.dot(&plane.get_normal()).abs() < 1e-4);
        assert!(v.dot(&plane.get_normal()).abs() < 1e-4);
        assert!(u.dot(&v).abs() < 1e-4);
        assert!((u.norm() - 1.0).abs() < 1e-4);
        assert!((v.norm() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn transform_point_scales_rotates_translates() {
        let transform = Transform{
            position: Point::new(10.0, 0.0, 0.0),
            rotation: Quaternion::from_axis_angle(&GeoVector::zhat(), FRAC_PI_2),
            scale: GeoVector::new(2.0, 2.0, 2.0),
        };
        // (1, 0, 0) -> scaled (2, 0, 0) -> rotated (0, 2, 0) -> translated (10, 2, 0)
        assert_point_close(
            &transform.transform_point(&Point::new(1.0, 0.0, 0.0)),
            &Point::new(10.0, 2.0, 0.0),
        );
    }

    #[test]
    fn rotate_around_fixes_the_center() {
        let mut transform = Transform::identity();
        transform.position = Point::new(2.0, 0.0, 0.0);
        let center = Point::new(1.0, 0.0, 0.0);

        transform.rotate_around(center, &GeoVector::yhat(), PI);

        assert_point_close(&transform.position, &Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_around_turns_the_orientation() {
        let mut transform = Transform::identity();
        transform.position = Point::new(1.0, 0.0, 0.0);

        transform.rotate_around(transform.position, &GeoVector::zhat(), FRAC_PI_2);

        // Position on the axis stays, orientation picks up the quarter turn
        assert_point_close(&transform.position, &Point::new(1.0, 0.0, 0.0));
        assert_vec_close(
            &transform.transform_direction(&GeoVector::xhat()),
            &GeoVector::yhat(),
        );
    }

    #[test]
    fn scale_around_fixes_the_center() {
        let mut transform = Transform::identity();
        transform.position = Point::new(3.0, 1.0, 0.0);
        let center = Point::new(1.0, 1.0, 0.0);

        transform.scale_around(center, 2.0);

        assert_point_close(&transform.position, &Point::new(5.0, 1.0, 0.0));
        assert_vec_close(&transform.scale, &GeoVector::new(2.0, 2.0, 2.0));
    }
}
