//! Vertex array backend interface.

use crate::backend::buffer::Buffer;
use crate::vertex_array::{Mode, VertexArrayError, VertexAttrib};

/// Vertex array backend.
///
/// A vertex array records vertex attribute layouts and the element buffer used for indexed draws.
pub unsafe trait VertexArray {
  /// Backend representation of the vertex array.
  type VertexArrayRepr;

  /// Create a new vertex array.
  unsafe fn new_vertex_array(&mut self) -> Result<Self::VertexArrayRepr, VertexArrayError>;

  /// Release the vertex array.
  unsafe fn destroy_vertex_array(vertex_array: &mut Self::VertexArrayRepr);

  /// Bind the vertex array.
  unsafe fn bind_vertex_array(vertex_array: &Self::VertexArrayRepr);

  /// Clear the vertex array binding.
  unsafe fn unbind_vertex_array(vertex_array: &Self::VertexArrayRepr);

  /// Declare and enable a float vertex attribute sourced from `buffer`.
  unsafe fn set_vertex_attrib<T>(
    vertex_array: &mut Self::VertexArrayRepr,
    buffer: &<Self as Buffer<T>>::BufferRepr,
    attrib: VertexAttrib,
  ) where
    Self: Buffer<T>;

  /// Record `buffer` as the element buffer of the vertex array.
  unsafe fn set_element_buffer(
    vertex_array: &mut Self::VertexArrayRepr,
    buffer: &<Self as Buffer<u32>>::BufferRepr,
  ) where
    Self: Buffer<u32>;

  /// Draw `count` vertices starting at `first`.
  unsafe fn draw_arrays(vertex_array: &Self::VertexArrayRepr, mode: Mode, first: usize, count: usize);

  /// Draw `count` indices read from the element buffer, starting at index `first`.
  unsafe fn draw_elements(
    vertex_array: &Self::VertexArrayRepr,
    mode: Mode,
    first: usize,
    count: usize,
  );

  /// Handle of the vertex array.
  unsafe fn vertex_array_handle(vertex_array: &Self::VertexArrayRepr) -> u32;
}
