//! glint tutorial programs.
//!
//! Every program is a module of this crate exposing a `LocalExample` type implementing [`Example`].
//! Programs don’t know anything about the platform they run on: the runner binary owns the window,
//! translates system events into [`InputAction`]s and gives access to files through
//! [`PlatformServices`].
//!
//! # Error handling
//!
//! Bootstrapping an example allocates GPU resources, compiles shaders and loads files, and any of
//! those can fail. Such failures are returned as [`ExampleError`] and are fatal for the runner.
//! Once bootstrapped, an example doesn’t fail anymore.

use glint::buffer::BufferError;
use glint::context::GraphicsContext;
use glint::shader::ProgramError;
use glint::texture::TextureError;
use glint::vertex_array::VertexArrayError;
use glint_windowing::CursorMode;
use std::{error, fmt, path::PathBuf};

pub mod lighting;
pub mod material;
mod shared;
pub mod textured_cubes;
pub mod triangle;
pub mod window;

/// Backend every example renders with.
pub type Backend = glint_gl::GL33;

/// Services the platform provides to examples.
pub trait PlatformServices {
  /// Path of an asset, given relatively to the asset root.
  fn asset_path(&self, name: &str) -> PathBuf;
}

/// Example interface.
pub trait Example: Sized {
  /// How the cursor should behave in the window of the example.
  fn cursor_mode() -> CursorMode {
    CursorMode::Visible
  }

  /// Bootstrap the example.
  fn bootstrap(
    platform: &mut impl PlatformServices,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<Self, ExampleError>;

  /// Render a frame of the example.
  ///
  /// `time` is the number of seconds elapsed since the example was bootstrapped.
  fn render_frame(
    self,
    time: f32,
    actions: impl Iterator<Item = InputAction>,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> LoopFeedback<Self>;
}

/// A type used to pass “inputs” to examples.
///
/// Movement actions (`Forward` to `Down`) are repeated on every frame the matching key is held
/// down; the other ones are sent once per key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
  /// Quit the application.
  Quit,

  /// Move forward.
  Forward,

  /// Move backward.
  Backward,

  /// Strafe left.
  Left,

  /// Strafe right.
  Right,

  /// Up direction. Typically used to increase a value.
  Up,

  /// Down direction. Typically used to decrease a value.
  Down,

  /// Switch to the next material.
  NextMaterial,

  /// Switch to the previous material.
  PreviousMaterial,

  /// Toggle the light animation.
  ToggleLight,

  /// Cursor moved, in window coordinates.
  CursorMoved { x: f32, y: f32 },

  /// Vertical scroll.
  VScroll { amount: f32 },

  /// Framebuffer size changed.
  Resized { width: u32, height: u32 },
}

/// Whether the render loop should go on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LoopFeedback<T> {
  /// Keep running with the given example state.
  Continue(T),

  /// Stop the render loop.
  Exit,
}

/// Errors that might happen while bootstrapping an example.
#[non_exhaustive]
#[derive(Debug)]
pub enum ExampleError {
  /// A vertex or element buffer could not be created.
  Buffer(BufferError),
  /// A vertex array could not be created.
  VertexArray(VertexArrayError),
  /// A shader program could not be built.
  Program(ProgramError),
  /// A texture could not be created.
  Texture(TextureError),
}

impl fmt::Display for ExampleError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ExampleError::Buffer(ref e) => write!(f, "buffer error: {}", e),
      ExampleError::VertexArray(ref e) => write!(f, "vertex array error: {}", e),
      ExampleError::Program(ref e) => write!(f, "program error: {}", e),
      ExampleError::Texture(ref e) => write!(f, "texture error: {}", e),
    }
  }
}

impl error::Error for ExampleError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ExampleError::Buffer(e) => Some(e),
      ExampleError::VertexArray(e) => Some(e),
      ExampleError::Program(e) => Some(e),
      ExampleError::Texture(e) => Some(e),
    }
  }
}

impl From<BufferError> for ExampleError {
  fn from(e: BufferError) -> Self {
    ExampleError::Buffer(e)
  }
}

impl From<VertexArrayError> for ExampleError {
  fn from(e: VertexArrayError) -> Self {
    ExampleError::VertexArray(e)
  }
}

impl From<ProgramError> for ExampleError {
  fn from(e: ProgramError) -> Self {
    ExampleError::Program(e)
  }
}

impl From<TextureError> for ExampleError {
  fn from(e: TextureError) -> Self {
    ExampleError::Texture(e)
  }
}
