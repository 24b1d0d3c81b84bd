//! Buffer backend interface.
//!
//! This interface defines the low-level API buffers must implement to be usable.

use crate::buffer::{BufferError, BufferTarget, Usage};

/// Buffer backend.
///
/// You want to implement that trait on your backend type to support buffers holding items of type
/// `T`.
pub unsafe trait Buffer<T> {
  /// The inner representation of the buffer for this backend.
  type BufferRepr;

  /// Create a new buffer meant to be bound to `target` and upload `data` into it.
  unsafe fn new_buffer(
    &mut self,
    target: BufferTarget,
    data: &[T],
    usage: Usage,
  ) -> Result<Self::BufferRepr, BufferError>;

  /// Release the buffer.
  unsafe fn destroy_buffer(buffer: &mut Self::BufferRepr);

  /// Bind the buffer to its target.
  unsafe fn bind_buffer(buffer: &Self::BufferRepr);

  /// Clear the binding of the buffer’s target.
  unsafe fn unbind_buffer(buffer: &Self::BufferRepr);

  /// Re-upload the whole content of the buffer.
  ///
  /// The driver storage might get reallocated but the handle must stay the same.
  unsafe fn replace_buffer(buffer: &mut Self::BufferRepr, data: &[T], usage: Usage);

  /// Handle of the buffer.
  unsafe fn buffer_handle(buffer: &Self::BufferRepr) -> u32;
}
