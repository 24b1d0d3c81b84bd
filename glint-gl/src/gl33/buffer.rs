//! OpenGL buffer implementation.

use crate::gl33::{
  state::{Bind, GLState},
  GL33,
};
use gl::types::*;
use glint::backend::buffer::Buffer as BufferBackend;
use glint::buffer::{BufferError, BufferTarget, Usage};
use std::{cell::RefCell, mem, rc::Rc};

/// OpenGL buffer.
#[derive(Debug)]
pub struct Buffer {
  pub(crate) handle: GLuint,
  target: BufferTarget,
  pub(crate) state: Rc<RefCell<GLState>>,
}

impl Buffer {
  // data always goes through the array target, so that uploading indices never changes the
  // element buffer of the bound vertex array
  unsafe fn upload<T>(&self, data: &[T], usage: Usage) {
    self
      .state
      .borrow_mut()
      .bind_array_buffer(self.handle, Bind::Cached);

    let bytes = mem::size_of::<T>() * data.len();
    gl::BufferData(
      gl::ARRAY_BUFFER,
      bytes as isize,
      data.as_ptr() as _,
      opengl_usage(usage),
    );
  }
}

unsafe impl<T> BufferBackend<T> for GL33 {
  type BufferRepr = Buffer;

  unsafe fn new_buffer(
    &mut self,
    target: BufferTarget,
    data: &[T],
    usage: Usage,
  ) -> Result<Self::BufferRepr, BufferError> {
    let mut handle: GLuint = 0;
    gl::GenBuffers(1, &mut handle);

    if handle == 0 {
      return Err(BufferError::CannotCreate);
    }

    // the first bind creates the buffer object; the cache doesn’t know about it yet
    self
      .state
      .borrow_mut()
      .bind_array_buffer(handle, Bind::Forced);

    let buffer = Buffer {
      handle,
      target,
      state: self.state.clone(),
    };
    buffer.upload(data, usage);

    Ok(buffer)
  }

  unsafe fn destroy_buffer(buffer: &mut Self::BufferRepr) {
    buffer.state.borrow_mut().forget_buffer(buffer.handle);
    gl::DeleteBuffers(1, &buffer.handle);
  }

  unsafe fn bind_buffer(buffer: &Self::BufferRepr) {
    let mut state = buffer.state.borrow_mut();

    match buffer.target {
      BufferTarget::Array => state.bind_array_buffer(buffer.handle, Bind::Cached),
      BufferTarget::ElementArray => state.bind_element_array_buffer(buffer.handle, Bind::Cached),
    }
  }

  unsafe fn unbind_buffer(buffer: &Self::BufferRepr) {
    let mut state = buffer.state.borrow_mut();

    match buffer.target {
      BufferTarget::Array => state.bind_array_buffer(0, Bind::Cached),
      BufferTarget::ElementArray => state.bind_element_array_buffer(0, Bind::Forced),
    }
  }

  unsafe fn replace_buffer(buffer: &mut Self::BufferRepr, data: &[T], usage: Usage) {
    buffer.upload(data, usage);
  }

  unsafe fn buffer_handle(buffer: &Self::BufferRepr) -> u32 {
    buffer.handle
  }
}

fn opengl_usage(usage: Usage) -> GLenum {
  match usage {
    Usage::StaticDraw => gl::STATIC_DRAW,
    Usage::DynamicDraw => gl::DYNAMIC_DRAW,
    Usage::StreamDraw => gl::STREAM_DRAW,
  }
}
