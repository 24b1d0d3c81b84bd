//! A backend recording every call it gets, so that tests can check what the front types ask for
//! without any GPU around.

#![allow(dead_code)]

use glint::backend::buffer::Buffer;
use glint::backend::render::Render;
use glint::backend::shader::{Shader, Uniformable};
use glint::backend::texture::Texture;
use glint::backend::vertex_array::VertexArray;
use glint::buffer::{BufferError, BufferTarget, Usage};
use glint::context::GraphicsContext;
use glint::pixel::PixelFormat;
use glint::render::DepthTest;
use glint::shader::{ProgramError, StageError, StageType};
use glint::texture::{Parameter, Sampler, TextureError};
use glint::vertex_array::{Mode, VertexArrayError, VertexAttrib};
use std::cell::RefCell;
use std::rc::Rc;

/// Kind of object a handle names.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
  Buffer,
  Stage,
  Program,
  Texture,
  VertexArray,
}

/// Value written to a uniform.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Bool(bool),
  Int(i32),
  Float(f32),
  Vec3([f32; 3]),
  Mat4([[f32; 4]; 4]),
}

/// Everything the backend was asked to do.
#[derive(Debug, Default)]
pub struct Log {
  next_handle: u32,
  /// Uniform names active in every linked program; their location is their index.
  pub active_uniforms: Vec<String>,
  pub created: Vec<(Kind, u32)>,
  pub destroyed: Vec<(Kind, u32)>,
  pub buffer_uploads: Vec<(u32, BufferTarget, usize, Usage)>,
  pub bound_buffers: Vec<(BufferTarget, u32)>,
  pub current_program: u32,
  pub lookups: Vec<String>,
  pub writes: Vec<(u32, i32, Value)>,
  pub samplers: Vec<(u32, Sampler)>,
  pub texture_uploads: Vec<(u32, u32, u32, PixelFormat)>,
  pub texture_units: Vec<(u32, u32)>,
  pub parameters: Vec<(u32, Parameter)>,
  pub attributes: Vec<(u32, u32, VertexAttrib)>,
  pub element_buffers: Vec<(u32, u32)>,
  pub draws: Vec<(u32, Mode, usize, usize, bool)>,
  pub viewport: Option<[i32; 4]>,
  pub clear_color: Option<[f32; 4]>,
  pub clears: Vec<(bool, bool)>,
  pub depth_test: Option<DepthTest>,
}

impl Log {
  fn create(&mut self, kind: Kind) -> u32 {
    self.next_handle += 1;
    self.created.push((kind, self.next_handle));
    self.next_handle
  }

  /// Number of live objects of a given kind.
  pub fn alive(&self, kind: Kind) -> usize {
    let created = self.created.iter().filter(|(k, _)| *k == kind).count();
    let destroyed = self.destroyed.iter().filter(|(k, _)| *k == kind).count();
    created - destroyed
  }

  /// How many times a handle was destroyed.
  pub fn destroy_count(&self, handle: u32) -> usize {
    self.destroyed.iter().filter(|(_, h)| *h == handle).count()
  }
}

/// Representation shared by every kind of object.
#[derive(Debug)]
pub struct Object {
  pub handle: u32,
  kind: Kind,
  target: Option<BufferTarget>,
  src: String,
  log: Rc<RefCell<Log>>,
}

impl Object {
  fn destroy(&mut self) {
    self.log.borrow_mut().destroyed.push((self.kind, self.handle));
  }
}

#[derive(Debug, Default)]
pub struct Mock {
  pub log: Rc<RefCell<Log>>,
}

impl Mock {
  fn object(&mut self, kind: Kind) -> Object {
    let handle = self.log.borrow_mut().create(kind);

    Object {
      handle,
      kind,
      target: None,
      src: String::new(),
      log: self.log.clone(),
    }
  }
}

#[derive(Debug, Default)]
pub struct MockContext {
  backend: Mock,
}

impl MockContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Context whose programs expose the given uniforms, at the location of their index.
  pub fn with_uniforms(names: &[&str]) -> Self {
    let ctx = Self::default();
    ctx.backend.log.borrow_mut().active_uniforms = names.iter().map(|&n| n.to_owned()).collect();
    ctx
  }

  pub fn log(&self) -> Rc<RefCell<Log>> {
    self.backend.log.clone()
  }
}

unsafe impl GraphicsContext for MockContext {
  type Backend = Mock;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.backend
  }
}

unsafe impl<T> Buffer<T> for Mock {
  type BufferRepr = Object;

  unsafe fn new_buffer(
    &mut self,
    target: BufferTarget,
    data: &[T],
    usage: Usage,
  ) -> Result<Self::BufferRepr, BufferError> {
    let mut buffer = self.object(Kind::Buffer);
    buffer.target = Some(target);
    self
      .log
      .borrow_mut()
      .buffer_uploads
      .push((buffer.handle, target, data.len(), usage));

    Ok(buffer)
  }

  unsafe fn destroy_buffer(buffer: &mut Self::BufferRepr) {
    buffer.destroy();
  }

  unsafe fn bind_buffer(buffer: &Self::BufferRepr) {
    let target = buffer.target.unwrap();
    buffer.log.borrow_mut().bound_buffers.push((target, buffer.handle));
  }

  unsafe fn unbind_buffer(buffer: &Self::BufferRepr) {
    let target = buffer.target.unwrap();
    buffer.log.borrow_mut().bound_buffers.push((target, 0));
  }

  unsafe fn replace_buffer(buffer: &mut Self::BufferRepr, data: &[T], usage: Usage) {
    let target = buffer.target.unwrap();
    buffer
      .log
      .borrow_mut()
      .buffer_uploads
      .push((buffer.handle, target, data.len(), usage));
  }

  unsafe fn buffer_handle(buffer: &Self::BufferRepr) -> u32 {
    buffer.handle
  }
}

unsafe impl Shader for Mock {
  type StageRepr = Object;

  type ProgramRepr = Object;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    if src.contains("syntax error") {
      return Err(StageError::compilation_failed(ty, "0:1: syntax error"));
    }

    let mut stage = self.object(Kind::Stage);
    stage.src = src.to_owned();
    Ok(stage)
  }

  unsafe fn destroy_stage(stage: &mut Self::StageRepr) {
    stage.destroy();
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    if vertex.src.contains("link error") || fragment.src.contains("link error") {
      return Err(ProgramError::link_failed("undefined reference"));
    }

    Ok(self.object(Kind::Program))
  }

  unsafe fn destroy_program(program: &mut Self::ProgramRepr) {
    program.destroy();
  }

  unsafe fn use_program(program: &Self::ProgramRepr) {
    program.log.borrow_mut().current_program = program.handle;
  }

  unsafe fn uniform_location(program: &Self::ProgramRepr, name: &str) -> i32 {
    let mut log = program.log.borrow_mut();
    log.lookups.push(name.to_owned());
    log
      .active_uniforms
      .iter()
      .position(|n| n == name)
      .map_or(-1, |i| i as i32)
  }

  unsafe fn program_handle(program: &Self::ProgramRepr) -> u32 {
    program.handle
  }
}

macro_rules! impl_uniformable {
  ($t:ty, $v:ident, $conv:expr) => {
    unsafe impl Uniformable<$t> for Mock {
      unsafe fn update(program: &Self::ProgramRepr, location: i32, value: $t) {
        let mut log = program.log.borrow_mut();
        // writes only make sense on the current program
        assert_eq!(log.current_program, program.handle);
        log
          .writes
          .push((program.handle, location, Value::$v($conv(value))));
      }
    }
  };
}

impl_uniformable!(bool, Bool, |v| v);
impl_uniformable!(i32, Int, |v| v);
impl_uniformable!(f32, Float, |v| v);
impl_uniformable!([f32; 3], Vec3, |v| v);
impl_uniformable!(cgmath::Vector3<f32>, Vec3, |v: cgmath::Vector3<f32>| v.into());
impl_uniformable!(cgmath::Matrix4<f32>, Mat4, |v: cgmath::Matrix4<f32>| v.into());

unsafe impl Texture for Mock {
  type TextureRepr = Object;

  unsafe fn new_texture(&mut self, sampler: &Sampler) -> Result<Self::TextureRepr, TextureError> {
    let texture = self.object(Kind::Texture);
    self.log.borrow_mut().samplers.push((texture.handle, *sampler));
    Ok(texture)
  }

  unsafe fn destroy_texture(texture: &mut Self::TextureRepr) {
    texture.destroy();
  }

  unsafe fn upload_texels(
    texture: &mut Self::TextureRepr,
    width: u32,
    height: u32,
    format: PixelFormat,
    _: &[u8],
  ) -> Result<(), TextureError> {
    texture
      .log
      .borrow_mut()
      .texture_uploads
      .push((texture.handle, width, height, format));
    Ok(())
  }

  unsafe fn bind_texture(texture: &Self::TextureRepr, unit: u32) {
    texture
      .log
      .borrow_mut()
      .texture_units
      .push((unit, texture.handle));
  }

  unsafe fn unbind_texture(texture: &Self::TextureRepr) {
    texture.log.borrow_mut().texture_units.push((0, 0));
  }

  unsafe fn set_texture_parameter(texture: &mut Self::TextureRepr, param: Parameter) {
    texture
      .log
      .borrow_mut()
      .parameters
      .push((texture.handle, param));
  }

  unsafe fn texture_handle(texture: &Self::TextureRepr) -> u32 {
    texture.handle
  }
}

unsafe impl VertexArray for Mock {
  type VertexArrayRepr = Object;

  unsafe fn new_vertex_array(&mut self) -> Result<Self::VertexArrayRepr, VertexArrayError> {
    Ok(self.object(Kind::VertexArray))
  }

  unsafe fn destroy_vertex_array(vertex_array: &mut Self::VertexArrayRepr) {
    vertex_array.destroy();
  }

  unsafe fn bind_vertex_array(_: &Self::VertexArrayRepr) {}

  unsafe fn unbind_vertex_array(_: &Self::VertexArrayRepr) {}

  unsafe fn set_vertex_attrib<T>(
    vertex_array: &mut Self::VertexArrayRepr,
    buffer: &<Self as Buffer<T>>::BufferRepr,
    attrib: VertexAttrib,
  ) where
    Self: Buffer<T>,
  {
    let handle = <Self as Buffer<T>>::buffer_handle(buffer);
    vertex_array
      .log
      .borrow_mut()
      .attributes
      .push((vertex_array.handle, handle, attrib));
  }

  unsafe fn set_element_buffer(
    vertex_array: &mut Self::VertexArrayRepr,
    buffer: &<Self as Buffer<u32>>::BufferRepr,
  ) where
    Self: Buffer<u32>,
  {
    let handle = <Self as Buffer<u32>>::buffer_handle(buffer);
    vertex_array
      .log
      .borrow_mut()
      .element_buffers
      .push((vertex_array.handle, handle));
  }

  unsafe fn draw_arrays(vertex_array: &Self::VertexArrayRepr, mode: Mode, first: usize, count: usize) {
    vertex_array
      .log
      .borrow_mut()
      .draws
      .push((vertex_array.handle, mode, first, count, false));
  }

  unsafe fn draw_elements(
    vertex_array: &Self::VertexArrayRepr,
    mode: Mode,
    first: usize,
    count: usize,
  ) {
    vertex_array
      .log
      .borrow_mut()
      .draws
      .push((vertex_array.handle, mode, first, count, true));
  }

  unsafe fn vertex_array_handle(vertex_array: &Self::VertexArrayRepr) -> u32 {
    vertex_array.handle
  }
}

unsafe impl Render for Mock {
  unsafe fn set_viewport(&mut self, viewport: [i32; 4]) {
    self.log.borrow_mut().viewport = Some(viewport);
  }

  unsafe fn set_clear_color(&mut self, color: [f32; 4]) {
    self.log.borrow_mut().clear_color = Some(color);
  }

  unsafe fn clear(&mut self, color: bool, depth: bool) {
    self.log.borrow_mut().clears.push((color, depth));
  }

  unsafe fn set_depth_test(&mut self, depth_test: DepthTest) {
    self.log.borrow_mut().depth_test = Some(depth_test);
  }
}
