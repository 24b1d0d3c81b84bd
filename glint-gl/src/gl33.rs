//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for glint. The backend type is [`GL33`].
//!
//! Every binding done by the backend goes through a per-thread state cache, so that asking twice
//! in a row for the same program, vertex array, buffer or texture only reaches the driver once.

mod buffer;
mod pixel;
mod render;
mod shader;
mod state;
mod texture;
mod vertex_array;

pub use self::buffer::Buffer;
pub use self::shader::{Program, Stage};
use self::state::GLState;
pub use self::state::StateQueryError;
pub use self::texture::Texture;
pub use self::vertex_array::VertexArray;
use std::cell::RefCell;
use std::rc::Rc;

/// An OpenGL 3.3 backend.
///
/// This type is to be used as a glint backend type. It implements the whole public API.
#[derive(Debug)]
pub struct GL33 {
  pub(crate) state: Rc<RefCell<GLState>>,
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// An OpenGL 3.3 context must be current on the calling thread and its functions loaded. Only
  /// one backend can be created per thread.
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL33 {
      state: Rc::new(RefCell::new(state)),
    })
  }
}
