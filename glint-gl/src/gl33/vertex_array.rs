use crate::gl33::{
  state::{Bind, GLState},
  GL33,
};
use gl::types::*;
use glint::backend::buffer::Buffer as BufferBackend;
use glint::backend::vertex_array::VertexArray as VertexArrayBackend;
use glint::vertex_array::{Mode, VertexArrayError, VertexAttrib};
use std::{cell::RefCell, mem, os::raw::c_void, rc::Rc};

/// OpenGL vertex array object.
#[derive(Debug)]
pub struct VertexArray {
  handle: GLuint,
  state: Rc<RefCell<GLState>>,
}

impl VertexArray {
  unsafe fn bind(&self) {
    self
      .state
      .borrow_mut()
      .bind_vertex_array(self.handle, Bind::Cached);
  }
}

unsafe impl VertexArrayBackend for GL33 {
  type VertexArrayRepr = VertexArray;

  unsafe fn new_vertex_array(&mut self) -> Result<Self::VertexArrayRepr, VertexArrayError> {
    let mut handle: GLuint = 0;
    gl::GenVertexArrays(1, &mut handle);

    if handle == 0 {
      return Err(VertexArrayError::CannotCreate);
    }

    Ok(VertexArray {
      handle,
      state: self.state.clone(),
    })
  }

  unsafe fn destroy_vertex_array(vertex_array: &mut Self::VertexArrayRepr) {
    vertex_array
      .state
      .borrow_mut()
      .forget_vertex_array(vertex_array.handle);
    gl::DeleteVertexArrays(1, &vertex_array.handle);
  }

  unsafe fn bind_vertex_array(vertex_array: &Self::VertexArrayRepr) {
    vertex_array.bind();
  }

  unsafe fn unbind_vertex_array(vertex_array: &Self::VertexArrayRepr) {
    vertex_array.state.borrow_mut().unbind_vertex_array();
  }

  unsafe fn set_vertex_attrib<T>(
    vertex_array: &mut Self::VertexArrayRepr,
    buffer: &<Self as BufferBackend<T>>::BufferRepr,
    attrib: VertexAttrib,
  ) where
    Self: BufferBackend<T>,
  {
    vertex_array.bind();

    let handle = <Self as BufferBackend<T>>::buffer_handle(buffer);
    vertex_array
      .state
      .borrow_mut()
      .bind_array_buffer(handle, Bind::Cached);

    gl::VertexAttribPointer(
      attrib.index as GLuint,
      attrib.components as GLint,
      gl::FLOAT,
      gl::FALSE,
      attrib.stride as GLsizei,
      attrib.offset as *const c_void,
    );
    gl::EnableVertexAttribArray(attrib.index as GLuint);
  }

  unsafe fn set_element_buffer(
    vertex_array: &mut Self::VertexArrayRepr,
    buffer: &<Self as BufferBackend<u32>>::BufferRepr,
  ) where
    Self: BufferBackend<u32>,
  {
    vertex_array.bind();

    let handle = <Self as BufferBackend<u32>>::buffer_handle(buffer);
    vertex_array
      .state
      .borrow_mut()
      .bind_element_array_buffer(handle, Bind::Forced);
  }

  unsafe fn draw_arrays(vertex_array: &Self::VertexArrayRepr, mode: Mode, first: usize, count: usize) {
    vertex_array.bind();
    gl::DrawArrays(opengl_mode(mode), first as GLint, count as GLsizei);
  }

  unsafe fn draw_elements(
    vertex_array: &Self::VertexArrayRepr,
    mode: Mode,
    first: usize,
    count: usize,
  ) {
    vertex_array.bind();
    gl::DrawElements(
      opengl_mode(mode),
      count as GLsizei,
      gl::UNSIGNED_INT,
      (first * mem::size_of::<u32>()) as *const c_void,
    );
  }

  unsafe fn vertex_array_handle(vertex_array: &Self::VertexArrayRepr) -> u32 {
    vertex_array.handle
  }
}

fn opengl_mode(mode: Mode) -> GLenum {
  match mode {
    Mode::Points => gl::POINTS,
    Mode::Lines => gl::LINES,
    Mode::LineStrip => gl::LINE_STRIP,
    Mode::Triangles => gl::TRIANGLES,
    Mode::TriangleStrip => gl::TRIANGLE_STRIP,
    Mode::TriangleFan => gl::TRIANGLE_FAN,
  }
}
