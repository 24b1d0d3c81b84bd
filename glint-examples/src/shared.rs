use crate::InputAction;
use cgmath::{Matrix4, Point3};
use glint::camera::{Camera, Movement};

/// Color the framebuffer is cleared with.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.];

/// Number of floats per vertex of [`CUBE_VERTICES`].
pub const CUBE_STRIDE: usize = 8;

/// Number of vertices of [`CUBE_VERTICES`].
pub const CUBE_VERTEX_COUNT: usize = 36;

// near and far clipping planes
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.;

// Unit cube centered on the origin, as 12 non-indexed triangles. Each vertex is made of a position,
// a normal and texture coordinates.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT * CUBE_STRIDE] = [
  // positions       // normals         // texture coords
  -0.5, -0.5, -0.5,   0.0,  0.0, -1.0,   0.0, 0.0,
   0.5, -0.5, -0.5,   0.0,  0.0, -1.0,   1.0, 0.0,
   0.5,  0.5, -0.5,   0.0,  0.0, -1.0,   1.0, 1.0,
   0.5,  0.5, -0.5,   0.0,  0.0, -1.0,   1.0, 1.0,
  -0.5,  0.5, -0.5,   0.0,  0.0, -1.0,   0.0, 1.0,
  -0.5, -0.5, -0.5,   0.0,  0.0, -1.0,   0.0, 0.0,

  -0.5, -0.5,  0.5,   0.0,  0.0,  1.0,   0.0, 0.0,
   0.5, -0.5,  0.5,   0.0,  0.0,  1.0,   1.0, 0.0,
   0.5,  0.5,  0.5,   0.0,  0.0,  1.0,   1.0, 1.0,
   0.5,  0.5,  0.5,   0.0,  0.0,  1.0,   1.0, 1.0,
  -0.5,  0.5,  0.5,   0.0,  0.0,  1.0,   0.0, 1.0,
  -0.5, -0.5,  0.5,   0.0,  0.0,  1.0,   0.0, 0.0,

  -0.5,  0.5,  0.5,  -1.0,  0.0,  0.0,   1.0, 0.0,
  -0.5,  0.5, -0.5,  -1.0,  0.0,  0.0,   1.0, 1.0,
  -0.5, -0.5, -0.5,  -1.0,  0.0,  0.0,   0.0, 1.0,
  -0.5, -0.5, -0.5,  -1.0,  0.0,  0.0,   0.0, 1.0,
  -0.5, -0.5,  0.5,  -1.0,  0.0,  0.0,   0.0, 0.0,
  -0.5,  0.5,  0.5,  -1.0,  0.0,  0.0,   1.0, 0.0,

   0.5,  0.5,  0.5,   1.0,  0.0,  0.0,   1.0, 0.0,
   0.5,  0.5, -0.5,   1.0,  0.0,  0.0,   1.0, 1.0,
   0.5, -0.5, -0.5,   1.0,  0.0,  0.0,   0.0, 1.0,
   0.5, -0.5, -0.5,   1.0,  0.0,  0.0,   0.0, 1.0,
   0.5, -0.5,  0.5,   1.0,  0.0,  0.0,   0.0, 0.0,
   0.5,  0.5,  0.5,   1.0,  0.0,  0.0,   1.0, 0.0,

  -0.5, -0.5, -0.5,   0.0, -1.0,  0.0,   0.0, 1.0,
   0.5, -0.5, -0.5,   0.0, -1.0,  0.0,   1.0, 1.0,
   0.5, -0.5,  0.5,   0.0, -1.0,  0.0,   1.0, 0.0,
   0.5, -0.5,  0.5,   0.0, -1.0,  0.0,   1.0, 0.0,
  -0.5, -0.5,  0.5,   0.0, -1.0,  0.0,   0.0, 0.0,
  -0.5, -0.5, -0.5,   0.0, -1.0,  0.0,   0.0, 1.0,

  -0.5,  0.5, -0.5,   0.0,  1.0,  0.0,   0.0, 1.0,
   0.5,  0.5, -0.5,   0.0,  1.0,  0.0,   1.0, 1.0,
   0.5,  0.5,  0.5,   0.0,  1.0,  0.0,   1.0, 0.0,
   0.5,  0.5,  0.5,   0.0,  1.0,  0.0,   1.0, 0.0,
  -0.5,  0.5,  0.5,   0.0,  1.0,  0.0,   0.0, 0.0,
  -0.5,  0.5, -0.5,   0.0,  1.0,  0.0,   0.0, 1.0,
];

/// Turns absolute cursor positions into offsets.
///
/// The first position only records where the cursor is, so that the camera doesn’t jump when the
/// cursor enters the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseLook {
  last: Option<[f32; 2]>,
}

impl MouseLook {
  /// Offsets since the previous position, `y` growing upwards.
  pub fn offsets(&mut self, x: f32, y: f32) -> [f32; 2] {
    let [last_x, last_y] = self.last.unwrap_or([x, y]);
    self.last = Some([x, y]);

    [x - last_x, last_y - y]
  }
}

/// A [`Camera`] driven by input actions.
#[derive(Clone, Debug)]
pub struct FreeCamera {
  camera: Camera,
  mouse: MouseLook,
  aspect_ratio: f32,
}

impl FreeCamera {
  /// Camera at `position`, assuming a 4:3 framebuffer until told otherwise.
  pub fn new(position: Point3<f32>) -> Self {
    FreeCamera {
      camera: Camera::new(position),
      mouse: MouseLook::default(),
      aspect_ratio: 4. / 3.,
    }
  }

  /// Move, turn or zoom the camera. Returns whether the action was used.
  pub fn react(&mut self, action: InputAction, delta_time: f32) -> bool {
    match action {
      InputAction::Forward => self.camera.process_keyboard(Movement::Forward, delta_time),
      InputAction::Backward => self.camera.process_keyboard(Movement::Backward, delta_time),
      InputAction::Left => self.camera.process_keyboard(Movement::Left, delta_time),
      InputAction::Right => self.camera.process_keyboard(Movement::Right, delta_time),

      InputAction::CursorMoved { x, y } => {
        let [x_offset, y_offset] = self.mouse.offsets(x, y);
        self.camera.process_mouse_movement(x_offset, y_offset);
      }

      InputAction::VScroll { amount } => self.camera.process_mouse_scroll(amount),

      _ => return false,
    }

    true
  }

  /// Update the aspect ratio of the projection.
  ///
  /// A zero-sized framebuffer (minimized window) keeps the previous one.
  pub fn resize(&mut self, width: u32, height: u32) {
    if width > 0 && height > 0 {
      self.aspect_ratio = width as f32 / height as f32;
    }
  }

  pub fn camera(&self) -> &Camera {
    &self.camera
  }

  pub fn view(&self) -> Matrix4<f32> {
    self.camera.view_matrix()
  }

  pub fn projection(&self) -> Matrix4<f32> {
    self
      .camera
      .projection_matrix(self.aspect_ratio, Z_NEAR, Z_FAR)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_cursor_position_does_not_move() {
    let mut mouse = MouseLook::default();

    assert_eq!(mouse.offsets(400., 300.), [0., 0.]);
    assert_eq!(mouse.offsets(410., 290.), [10., 10.]);
    assert_eq!(mouse.offsets(405., 300.), [-5., -10.]);
  }

  #[test]
  fn free_camera_ignores_unrelated_actions() {
    let mut free = FreeCamera::new(Point3::new(0., 0., 3.));
    let before = free.camera().clone();

    assert!(!free.react(InputAction::NextMaterial, 1.));
    assert!(!free.react(InputAction::Up, 1.));
    assert_eq!(free.camera(), &before);

    assert!(free.react(InputAction::VScroll { amount: 5. }, 1.));
    assert_eq!(free.camera().zoom(), 40.);
  }

  #[test]
  fn minimized_window_keeps_aspect_ratio() {
    let mut free = FreeCamera::new(Point3::new(0., 0., 3.));
    let projection = free.projection();

    free.resize(0, 0);
    assert_eq!(free.projection(), projection);

    free.resize(600, 600);
    assert_ne!(free.projection(), projection);
  }

  #[test]
  fn cube_has_unit_normals() {
    for vertex in CUBE_VERTICES.chunks(CUBE_STRIDE) {
      let n = &vertex[3..6];
      assert_eq!(n.iter().map(|c| c * c).sum::<f32>(), 1.);
    }
  }
}
