//! Vertex and element buffers.
//!
//! A GPU buffer is a typed continuous region of data. Two flavors exist:
//!
//! - [`VertexBuffer`], holding vertex data of any type `T`, bound to the array target.
//! - [`ElementBuffer`], holding `u32` indices, bound to the element array target. It keeps track
//!   of how many indices it holds so that indexed draws know how far they can go.
//!
//! Both are created from a slice and a [`Usage`] hint, and can have their content replaced in
//! place with [`VertexBuffer::replace`] / [`ElementBuffer::replace`]. Replacing never changes the
//! handle of a buffer.
//!
//! # Ownership
//!
//! A buffer owns its handle. Moving a buffer moves the handle; buffers cannot be cloned. The
//! handle is released when the buffer is dropped, after any cached binding of it is cleared.
//!
//! # Binding
//!
//! [`VertexBuffer::bind`] and [`ElementBuffer::bind`] change the global binding of their target.
//! Note that the element array binding is part of the state of the currently bound vertex array.

use crate::backend::buffer::Buffer as BufferBackend;
use crate::context::GraphicsContext;
use std::error;
use std::fmt;
use std::marker::PhantomData;

/// Hint given to the driver about how the content of a buffer is going to be accessed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Usage {
  /// Written once, drawn many times.
  StaticDraw,
  /// Rewritten often, drawn many times.
  DynamicDraw,
  /// Written once, drawn a few times.
  StreamDraw,
}

impl Default for Usage {
  fn default() -> Self {
    Usage::StaticDraw
  }
}

/// Binding target of a buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferTarget {
  /// Vertex attributes.
  Array,
  /// Vertex indices.
  ElementArray,
}

/// Buffer errors.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq)]
pub enum BufferError {
  /// The driver could not give a new buffer handle.
  CannotCreate,
}

impl fmt::Display for BufferError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      BufferError::CannotCreate => f.write_str("cannot create buffer"),
    }
  }
}

impl error::Error for BufferError {}

/// A GPU buffer of vertex data.
///
/// # Parametricity
///
/// `B` is the backend type. It must implement [`backend::buffer::Buffer`].
///
/// `T` is the type of stored items, typically a vertex struct or `f32` for raw interleaved data.
///
/// [`backend::buffer::Buffer`]: crate::backend::buffer::Buffer
#[derive(Debug)]
pub struct VertexBuffer<B, T>
where
  B: ?Sized + BufferBackend<T>,
{
  pub(crate) repr: B::BufferRepr,
  len: usize,
  _t: PhantomData<T>,
}

impl<B, T> Drop for VertexBuffer<B, T>
where
  B: ?Sized + BufferBackend<T>,
{
  fn drop(&mut self) {
    unsafe { B::destroy_buffer(&mut self.repr) };
  }
}

impl<B, T> VertexBuffer<B, T>
where
  B: ?Sized + BufferBackend<T>,
{
  /// Create a new vertex buffer and upload `data` into it.
  ///
  /// # Notes
  ///
  /// You might be interested in the [`GraphicsContext::new_vertex_buffer`] function instead,
  /// which is the exact same function, but benefits from more type inference.
  pub fn new<C>(ctx: &mut C, data: &[T], usage: Usage) -> Result<Self, BufferError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let repr = unsafe { ctx.backend().new_buffer(BufferTarget::Array, data, usage)? };

    Ok(VertexBuffer {
      repr,
      len: data.len(),
      _t: PhantomData,
    })
  }

  /// Bind the buffer to the array target.
  pub fn bind(&self) {
    unsafe { B::bind_buffer(&self.repr) }
  }

  /// Clear the array target binding.
  pub fn unbind(&self) {
    unsafe { B::unbind_buffer(&self.repr) }
  }

  /// Replace the whole content of the buffer.
  ///
  /// The length of the buffer becomes the length of `data`. The handle doesn’t change.
  pub fn replace(&mut self, data: &[T], usage: Usage) {
    unsafe { B::replace_buffer(&mut self.repr, data, usage) };
    self.len = data.len();
  }

  /// Handle of the buffer.
  pub fn handle(&self) -> u32 {
    unsafe { B::buffer_handle(&self.repr) }
  }

  /// Number of items in the buffer.
  pub fn len(&self) -> usize {
    self.len
  }

  /// Whether the buffer is empty.
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

/// A GPU buffer of `u32` indices.
///
/// See [`VertexBuffer`] for the meaning of `B`.
#[derive(Debug)]
pub struct ElementBuffer<B>
where
  B: ?Sized + BufferBackend<u32>,
{
  pub(crate) repr: B::BufferRepr,
  count: usize,
}

impl<B> Drop for ElementBuffer<B>
where
  B: ?Sized + BufferBackend<u32>,
{
  fn drop(&mut self) {
    unsafe { B::destroy_buffer(&mut self.repr) };
  }
}

impl<B> ElementBuffer<B>
where
  B: ?Sized + BufferBackend<u32>,
{
  /// Create a new element buffer and upload `indices` into it.
  ///
  /// # Notes
  ///
  /// You might be interested in the [`GraphicsContext::new_element_buffer`] function instead,
  /// which is the exact same function, but benefits from more type inference.
  pub fn new<C>(ctx: &mut C, indices: &[u32], usage: Usage) -> Result<Self, BufferError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let repr = unsafe {
      ctx
        .backend()
        .new_buffer(BufferTarget::ElementArray, indices, usage)?
    };

    Ok(ElementBuffer {
      repr,
      count: indices.len(),
    })
  }

  /// Bind the buffer to the element array target.
  ///
  /// If a vertex array is bound, this changes its element buffer.
  pub fn bind(&self) {
    unsafe { B::bind_buffer(&self.repr) }
  }

  /// Clear the element array target binding.
  pub fn unbind(&self) {
    unsafe { B::unbind_buffer(&self.repr) }
  }

  /// Replace the whole content of the buffer.
  ///
  /// The index count becomes the length of `indices`. The handle doesn’t change.
  pub fn replace(&mut self, indices: &[u32], usage: Usage) {
    unsafe { B::replace_buffer(&mut self.repr, indices, usage) };
    self.count = indices.len();
  }

  /// Handle of the buffer.
  pub fn handle(&self) -> u32 {
    unsafe { B::buffer_handle(&self.repr) }
  }

  /// Number of indices in the buffer.
  pub fn count(&self) -> usize {
    self.count
  }

  /// Whether the buffer holds no index.
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }
}
