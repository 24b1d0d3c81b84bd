//! Render state backend interface.

use crate::render::DepthTest;

/// Render state backend.
///
/// Unlike the other backend traits, this one acts on the backend itself: viewport, clear color
/// and depth test are global to the graphics context.
pub unsafe trait Render {
  /// Set the viewport as `[x, y, width, height]`.
  unsafe fn set_viewport(&mut self, viewport: [i32; 4]);

  /// Set the color used when clearing the color buffer.
  unsafe fn set_clear_color(&mut self, color: [f32; 4]);

  /// Clear the color buffer, the depth buffer or both.
  unsafe fn clear(&mut self, color: bool, depth: bool);

  /// Enable or disable the depth test.
  unsafe fn set_depth_test(&mut self, depth_test: DepthTest);
}
