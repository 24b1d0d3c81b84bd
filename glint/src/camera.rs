//! First-person camera.
//!
//! The [`Camera`] is pure math: it never talks to the GPU. It keeps a position and an orientation
//! given by Euler angles (yaw and pitch, in degrees) and derives from them an orthonormal basis
//! (front, right and up) used to move around and build the view matrix. The basis is recomputed
//! by every call changing the angles, so it always matches them.
//!
//! Inputs are expected to be already translated into offsets by the caller: how far the mouse
//! moved since the previous frame, how much the wheel scrolled, how much time elapsed.

use cgmath::{perspective, Deg, InnerSpace as _, Matrix4, Point3, Vector3};

/// Default yaw, in degrees. Looks towards -Z.
pub const YAW: f32 = -90.;
/// Default pitch, in degrees.
pub const PITCH: f32 = 0.;
/// Default movement speed, in units per second.
pub const SPEED: f32 = 2.5;
/// Default mouse sensitivity, in degrees per unit of mouse movement.
pub const SENSITIVITY: f32 = 0.1;
/// Default vertical field of view, in degrees.
pub const ZOOM: f32 = 45.;

// pitch never reaches the poles, where the front vector would align with the world up
const PITCH_LIMIT: f32 = 89.;
const ZOOM_MIN: f32 = 1.;
const ZOOM_MAX: f32 = 45.;

/// Direction of a keyboard movement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Movement {
  /// Along the front vector.
  Forward,
  /// Against the front vector.
  Backward,
  /// Against the right vector.
  Left,
  /// Along the right vector.
  Right,
}

/// A first-person camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
  position: Point3<f32>,
  front: Vector3<f32>,
  up: Vector3<f32>,
  right: Vector3<f32>,
  world_up: Vector3<f32>,
  yaw: f32,
  pitch: f32,
  zoom: f32,
  speed: f32,
  sensitivity: f32,
}

impl Camera {
  /// Camera at `position` with the default orientation, speed, sensitivity and zoom, `+Y` being
  /// the world up.
  pub fn new(position: Point3<f32>) -> Self {
    Self::with_orientation(position, Vector3::unit_y(), YAW, PITCH)
  }

  /// Camera at `position` with a given world up and orientation, in degrees.
  ///
  /// `pitch` is clamped like it would be when moving the mouse.
  pub fn with_orientation(
    position: Point3<f32>,
    world_up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
  ) -> Self {
    let mut camera = Camera {
      position,
      front: -Vector3::unit_z(),
      up: world_up,
      right: Vector3::unit_x(),
      world_up,
      yaw,
      pitch: pitch.max(-PITCH_LIMIT).min(PITCH_LIMIT),
      zoom: ZOOM,
      speed: SPEED,
      sensitivity: SENSITIVITY,
    };

    camera.update_vectors();
    camera
  }

  /// Change the movement speed.
  pub fn set_speed(&mut self, speed: f32) {
    self.speed = speed;
  }

  /// Change the mouse sensitivity.
  pub fn set_sensitivity(&mut self, sensitivity: f32) {
    self.sensitivity = sensitivity;
  }

  /// Move along the front / right vectors by `speed * delta_time`.
  pub fn process_keyboard(&mut self, movement: Movement, delta_time: f32) {
    let velocity = self.speed * delta_time;

    match movement {
      Movement::Forward => self.position += self.front * velocity,
      Movement::Backward => self.position -= self.front * velocity,
      Movement::Left => self.position -= self.right * velocity,
      Movement::Right => self.position += self.right * velocity,
    }
  }

  /// Turn the camera by mouse offsets.
  ///
  /// Positive `x_offset` turns right, positive `y_offset` looks up. The pitch is clamped to
  /// ±89°.
  pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
    self.yaw += x_offset * self.sensitivity;
    self.pitch = (self.pitch + y_offset * self.sensitivity)
      .max(-PITCH_LIMIT)
      .min(PITCH_LIMIT);

    self.update_vectors();
  }

  /// Zoom in (positive `y_offset`) or out, keeping the field of view within [1°, 45°].
  pub fn process_mouse_scroll(&mut self, y_offset: f32) {
    self.zoom = (self.zoom - y_offset).max(ZOOM_MIN).min(ZOOM_MAX);
  }

  /// View matrix, looking from the position along the front vector.
  pub fn view_matrix(&self) -> Matrix4<f32> {
    Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
  }

  /// Perspective projection using the zoom as vertical field of view.
  pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
    perspective(Deg(self.zoom), aspect_ratio, near, far)
  }

  /// Position of the camera.
  pub fn position(&self) -> Point3<f32> {
    self.position
  }

  /// Front vector.
  pub fn front(&self) -> Vector3<f32> {
    self.front
  }

  /// Up vector.
  pub fn up(&self) -> Vector3<f32> {
    self.up
  }

  /// Right vector.
  pub fn right(&self) -> Vector3<f32> {
    self.right
  }

  /// World up vector.
  pub fn world_up(&self) -> Vector3<f32> {
    self.world_up
  }

  /// Yaw, in degrees.
  pub fn yaw(&self) -> f32 {
    self.yaw
  }

  /// Pitch, in degrees.
  pub fn pitch(&self) -> f32 {
    self.pitch
  }

  /// Vertical field of view, in degrees.
  pub fn zoom(&self) -> f32 {
    self.zoom
  }

  /// Movement speed, in units per second.
  pub fn speed(&self) -> f32 {
    self.speed
  }

  /// Mouse sensitivity.
  pub fn sensitivity(&self) -> f32 {
    self.sensitivity
  }

  fn update_vectors(&mut self) {
    let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());

    self.front = Vector3::new(
      yaw.cos() * pitch.cos(),
      pitch.sin(),
      yaw.sin() * pitch.cos(),
    )
    .normalize();
    self.right = self.front.cross(self.world_up).normalize();
    self.up = self.right.cross(self.front).normalize();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::{EuclideanSpace as _, Vector4};

  const EPSILON: f32 = 1e-5;

  fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
    assert!((a - b).magnitude() < EPSILON, "{:?} != {:?}", a, b);
  }

  #[test]
  fn default_camera_looks_towards_negative_z() {
    let camera = Camera::new(Point3::new(0., 0., 3.));

    assert_close(camera.front(), Vector3::new(0., 0., -1.));
    assert_close(camera.right(), Vector3::new(1., 0., 0.));
    assert_close(camera.up(), Vector3::new(0., 1., 0.));
    assert_eq!(camera.zoom(), ZOOM);
  }

  #[test]
  fn pitch_is_clamped() {
    let mut camera = Camera::new(Point3::new(0., 0., 0.));

    for _ in 0..100 {
      camera.process_mouse_movement(0., 1000.);
      assert!(camera.pitch() <= 89.);
    }

    assert_eq!(camera.pitch(), 89.);

    for _ in 0..100 {
      camera.process_mouse_movement(0., -1000.);
      assert!(camera.pitch() >= -89.);
    }

    assert_eq!(camera.pitch(), -89.);
  }

  #[test]
  fn basis_follows_angles() {
    let mut camera = Camera::new(Point3::new(0., 0., 0.));

    // 900 units at 0.1°/unit: a quarter turn, now looking towards +X
    camera.process_mouse_movement(900., 0.);

    assert_close(camera.front(), Vector3::new(1., 0., 0.));
    assert_close(camera.right(), Vector3::new(0., 0., 1.));
    assert!(camera.front().dot(camera.up()).abs() < EPSILON);
    assert!(camera.front().dot(camera.right()).abs() < EPSILON);
  }

  #[test]
  fn keyboard_moves_along_basis() {
    let mut camera = Camera::new(Point3::new(0., 0., 3.));

    camera.process_keyboard(Movement::Forward, 2.);
    assert_close(camera.position().to_vec(), Vector3::new(0., 0., -2.));

    camera.process_keyboard(Movement::Right, 1.);
    assert_close(camera.position().to_vec(), Vector3::new(2.5, 0., -2.));

    camera.process_keyboard(Movement::Left, 1.);
    camera.process_keyboard(Movement::Backward, 2.);
    assert_close(camera.position().to_vec(), Vector3::new(0., 0., 3.));
  }

  #[test]
  fn zoom_is_clamped() {
    let mut camera = Camera::new(Point3::new(0., 0., 0.));

    camera.process_mouse_scroll(10.);
    assert_eq!(camera.zoom(), 35.);

    camera.process_mouse_scroll(100.);
    assert_eq!(camera.zoom(), 1.);

    camera.process_mouse_scroll(-100.);
    assert_eq!(camera.zoom(), 45.);
  }

  #[test]
  fn view_matrix_moves_world_in_front_of_camera() {
    let camera = Camera::new(Point3::new(0., 0., 3.));
    let origin = camera.view_matrix() * Vector4::new(0., 0., 0., 1.);

    // the origin is 3 units ahead, that is, on the negative Z axis of view space
    assert!((origin.x).abs() < EPSILON);
    assert!((origin.y).abs() < EPSILON);
    assert!((origin.z + 3.).abs() < EPSILON);
  }
}
