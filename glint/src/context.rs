//! Graphics context.
//!
//! A graphics context is an object that abstracts all the low-level operations that happen on a
//! graphics device. This crate doesn’t provide you with creating such contexts. Instead, you must
//! do it yourself or rely on crates doing it for you, such as `glint-glfw`.
//!
//! # On context and threads
//!
//! This crate is designed to work with the following principles:
//!
//!   - An object which type implements [`GraphicsContext`] must be `!Send` and `!Sync`. This
//!     enforces that it cannot be moved nor shared between threads.
//!   - You can only create a single context per thread.
//!
//! Every resource created through a context is bound to the thread of that context as well.

use crate::backend::buffer::Buffer as BufferBackend;
use crate::backend::render::Render as RenderBackend;
use crate::backend::shader::Shader as ShaderBackend;
use crate::backend::texture::Texture as TextureBackend;
use crate::backend::vertex_array::VertexArray as VertexArrayBackend;
use crate::buffer::{BufferError, ElementBuffer, Usage, VertexBuffer};
use crate::pixel::PixelFormat;
use crate::render::DepthTest;
use crate::shader::{Program, ProgramError};
use crate::texture::{Flip, Texture, TextureError};
use crate::vertex_array::{VertexArray, VertexArrayError};
use std::path::Path;

/// Class of graphics context.
///
/// Such a context must not be Send nor Sync, which means that you cannot share it between
/// threads in any way (move / borrow).
///
/// Besides giving access to its backend, the trait provides shortcuts to create resources. They
/// are the exact same functions as the constructors of the resource types but benefit from more
/// type inference.
pub unsafe trait GraphicsContext: Sized {
  /// Backend type.
  type Backend: ?Sized;

  /// Access the underlying backend.
  fn backend(&mut self) -> &mut Self::Backend;

  /// Create a new vertex buffer. See [`VertexBuffer::new`].
  fn new_vertex_buffer<T>(
    &mut self,
    data: &[T],
    usage: Usage,
  ) -> Result<VertexBuffer<Self::Backend, T>, BufferError>
  where
    Self::Backend: BufferBackend<T>,
  {
    VertexBuffer::new(self, data, usage)
  }

  /// Create a new element buffer. See [`ElementBuffer::new`].
  fn new_element_buffer(
    &mut self,
    indices: &[u32],
    usage: Usage,
  ) -> Result<ElementBuffer<Self::Backend>, BufferError>
  where
    Self::Backend: BufferBackend<u32>,
  {
    ElementBuffer::new(self, indices, usage)
  }

  /// Compile and link a new program. See [`Program::new`].
  fn new_program(
    &mut self,
    vertex_src: &str,
    fragment_src: &str,
  ) -> Result<Program<Self::Backend>, ProgramError>
  where
    Self::Backend: ShaderBackend,
  {
    Program::new(self, vertex_src, fragment_src)
  }

  /// Create a new vertex array. See [`VertexArray::new`].
  fn new_vertex_array(&mut self) -> Result<VertexArray<Self::Backend>, VertexArrayError>
  where
    Self::Backend: VertexArrayBackend,
  {
    VertexArray::new(self)
  }

  /// Decode an image file and upload it as a texture. See [`Texture::load`].
  fn load_texture(
    &mut self,
    path: impl AsRef<Path>,
    format_hint: PixelFormat,
    flip: Flip,
  ) -> Result<Texture<Self::Backend>, TextureError>
  where
    Self::Backend: TextureBackend,
  {
    Texture::load(self, path, format_hint, flip)
  }

  /// Set the viewport.
  fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32)
  where
    Self::Backend: RenderBackend,
  {
    unsafe { self.backend().set_viewport([x, y, width, height]) }
  }

  /// Clear the framebuffer.
  ///
  /// The color buffer is cleared with the given color if any; the depth buffer is cleared if
  /// `depth` is `true`.
  fn clear(&mut self, color: Option<[f32; 4]>, depth: bool)
  where
    Self::Backend: RenderBackend,
  {
    unsafe {
      let backend = self.backend();

      if let Some(color) = color {
        backend.set_clear_color(color);
      }

      backend.clear(color.is_some(), depth);
    }
  }

  /// Enable or disable depth testing.
  fn set_depth_test(&mut self, depth_test: DepthTest)
  where
    Self::Backend: RenderBackend,
  {
    unsafe { self.backend().set_depth_test(depth_test) }
  }
}
