//! A window cleared to a single color.
//!
//! Press <escape> to quit or close the window.

use crate::shared::CLEAR_COLOR;
use crate::{Backend, Example, ExampleError, InputAction, LoopFeedback, PlatformServices};
use glint::context::GraphicsContext;

pub struct LocalExample;

impl Example for LocalExample {
  fn bootstrap(
    _: &mut impl PlatformServices,
    _: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<Self, ExampleError> {
    Ok(LocalExample)
  }

  fn render_frame(
    self,
    _: f32,
    actions: impl Iterator<Item = InputAction>,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> LoopFeedback<Self> {
    for action in actions {
      match action {
        InputAction::Quit => return LoopFeedback::Exit,
        InputAction::Resized { width, height } => {
          context.set_viewport(0, 0, width as _, height as _)
        }
        _ => (),
      }
    }

    context.clear(Some(CLEAR_COLOR), false);

    LoopFeedback::Continue(self)
  }
}
