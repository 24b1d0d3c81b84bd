//! Vertex arrays.
//!
//! A [`VertexArray`] records how vertex attributes are fetched from vertex buffers and which
//! element buffer is used for indexed draws. Once set up, drawing is a matter of calling
//! [`VertexArray::draw_arrays`] or [`VertexArray::draw_elements`] with the right program in use.

use crate::backend::buffer::Buffer as BufferBackend;
use crate::backend::vertex_array::VertexArray as VertexArrayBackend;
use crate::buffer::{ElementBuffer, VertexBuffer};
use crate::context::GraphicsContext;
use std::error;
use std::fmt;
use std::mem;

/// Primitive mode used to assemble vertices.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
  /// A single point per vertex.
  Points,
  /// A line every two vertices.
  Lines,
  /// A line between each vertex and the next one.
  LineStrip,
  /// A triangle every three vertices.
  Triangles,
  /// A triangle for each vertex, made with the two previous ones.
  TriangleStrip,
  /// A triangle for each vertex, made with the first and the previous ones.
  TriangleFan,
}

/// Layout of a float vertex attribute.
///
/// `stride` and `offset` are expressed in bytes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexAttrib {
  /// Attribute index, as in `layout (location = index)`.
  pub index: u32,
  /// Number of components, between 1 and 4.
  pub components: i32,
  /// Distance between two consecutive attributes.
  pub stride: usize,
  /// Offset of the first attribute from the start of the buffer.
  pub offset: usize,
}

impl VertexAttrib {
  /// Attribute in a buffer of interleaved `f32`, with `stride` and `offset` given in floats.
  pub fn floats(index: u32, components: i32, stride: usize, offset: usize) -> Self {
    let float_size = mem::size_of::<f32>();

    VertexAttrib {
      index,
      components,
      stride: stride * float_size,
      offset: offset * float_size,
    }
  }
}

/// Vertex array errors.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq)]
pub enum VertexArrayError {
  /// The driver could not give a new vertex array handle.
  CannotCreate,
}

impl fmt::Display for VertexArrayError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      VertexArrayError::CannotCreate => f.write_str("cannot create vertex array"),
    }
  }
}

impl error::Error for VertexArrayError {}

/// A vertex array.
#[derive(Debug)]
pub struct VertexArray<B>
where
  B: ?Sized + VertexArrayBackend,
{
  repr: B::VertexArrayRepr,
}

impl<B> Drop for VertexArray<B>
where
  B: ?Sized + VertexArrayBackend,
{
  fn drop(&mut self) {
    unsafe { B::destroy_vertex_array(&mut self.repr) };
  }
}

impl<B> VertexArray<B>
where
  B: ?Sized + VertexArrayBackend,
{
  /// Create a new, empty vertex array.
  pub fn new<C>(ctx: &mut C) -> Result<Self, VertexArrayError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let repr = unsafe { ctx.backend().new_vertex_array()? };
    Ok(VertexArray { repr })
  }

  /// Bind the vertex array.
  pub fn bind(&self) {
    unsafe { B::bind_vertex_array(&self.repr) }
  }

  /// Clear the vertex array binding.
  pub fn unbind(&self) {
    unsafe { B::unbind_vertex_array(&self.repr) }
  }

  /// Declare a float attribute read from `buffer` and enable it.
  ///
  /// Both the vertex array and the buffer get bound.
  pub fn set_attribute<T>(&mut self, buffer: &VertexBuffer<B, T>, attrib: VertexAttrib)
  where
    B: BufferBackend<T>,
  {
    unsafe { B::set_vertex_attrib::<T>(&mut self.repr, &buffer.repr, attrib) }
  }

  /// Use `buffer` as the element buffer of indexed draws.
  pub fn set_element_buffer(&mut self, buffer: &ElementBuffer<B>)
  where
    B: BufferBackend<u32>,
  {
    unsafe { B::set_element_buffer(&mut self.repr, &buffer.repr) }
  }

  /// Draw `count` vertices, starting at vertex `first`.
  pub fn draw_arrays(&self, mode: Mode, first: usize, count: usize) {
    unsafe { B::draw_arrays(&self.repr, mode, first, count) }
  }

  /// Draw `count` indices of the element buffer, starting at index `first`.
  pub fn draw_elements(&self, mode: Mode, first: usize, count: usize) {
    unsafe { B::draw_elements(&self.repr, mode, first, count) }
  }

  /// Handle of the vertex array.
  pub fn handle(&self) -> u32 {
    unsafe { B::vertex_array_handle(&self.repr) }
  }
}
