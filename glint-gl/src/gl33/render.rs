use crate::gl33::GL33;
use gl::types::*;
use glint::backend::render::Render;
use glint::render::DepthTest;

unsafe impl Render for GL33 {
  unsafe fn set_viewport(&mut self, viewport: [i32; 4]) {
    self.state.borrow_mut().set_viewport(viewport);
  }

  unsafe fn set_clear_color(&mut self, color: [f32; 4]) {
    self.state.borrow_mut().set_clear_color(color);
  }

  unsafe fn clear(&mut self, color: bool, depth: bool) {
    let mut bits: GLbitfield = 0;

    if color {
      bits |= gl::COLOR_BUFFER_BIT;
    }

    if depth {
      bits |= gl::DEPTH_BUFFER_BIT;
    }

    if bits != 0 {
      gl::Clear(bits);
    }
  }

  unsafe fn set_depth_test(&mut self, depth_test: DepthTest) {
    self.state.borrow_mut().set_depth_test(depth_test);
  }
}
