mod common;

use common::{Kind, MockContext};
use glint::buffer::{BufferTarget, Usage};
use glint::context::GraphicsContext as _;

#[test]
fn vertex_buffer_released_once_after_move() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let buffer = ctx
    .new_vertex_buffer(&[0.5f32, -0.5, 0.], Usage::StaticDraw)
    .unwrap();
  let handle = buffer.handle();
  assert_eq!(buffer.len(), 3);

  let moved = buffer;
  assert_eq!(moved.handle(), handle);
  assert_eq!(log.borrow().destroy_count(handle), 0);

  drop(moved);
  assert_eq!(log.borrow().destroy_count(handle), 1);
  assert_eq!(log.borrow().alive(Kind::Buffer), 0);
}

#[test]
fn reassignment_releases_previous_buffer() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let mut buffer = ctx.new_vertex_buffer(&[1u8, 2, 3], Usage::default()).unwrap();
  let first = buffer.handle();

  buffer = ctx.new_vertex_buffer(&[4u8], Usage::default()).unwrap();
  let second = buffer.handle();

  assert_ne!(first, second);
  assert_eq!(log.borrow().destroy_count(first), 1);
  assert_eq!(log.borrow().destroy_count(second), 0);
  assert_eq!(buffer.len(), 1);
}

#[test]
fn replace_keeps_handle() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let mut indices = ctx.new_element_buffer(&[0, 1, 2], Usage::StaticDraw).unwrap();
  let handle = indices.handle();
  assert_eq!(indices.count(), 3);

  indices.replace(&[0, 1, 3, 1, 2, 3], Usage::DynamicDraw);

  assert_eq!(indices.handle(), handle);
  assert_eq!(indices.count(), 6);
  assert_eq!(
    log.borrow().buffer_uploads,
    vec![
      (handle, BufferTarget::ElementArray, 3, Usage::StaticDraw),
      (handle, BufferTarget::ElementArray, 6, Usage::DynamicDraw),
    ]
  );
}

#[test]
fn buffers_bind_to_their_own_target() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let vertices = ctx.new_vertex_buffer(&[0f32; 9], Usage::StaticDraw).unwrap();
  let indices = ctx.new_element_buffer(&[0, 1, 2], Usage::StaticDraw).unwrap();

  vertices.bind();
  indices.bind();
  indices.unbind();

  assert_eq!(
    log.borrow().bound_buffers,
    vec![
      (BufferTarget::Array, vertices.handle()),
      (BufferTarget::ElementArray, indices.handle()),
      (BufferTarget::ElementArray, 0),
    ]
  );
}

#[test]
fn empty_buffers() {
  let mut ctx = MockContext::new();

  let vertices = ctx.new_vertex_buffer::<f32>(&[], Usage::StreamDraw).unwrap();
  let indices = ctx.new_element_buffer(&[], Usage::StreamDraw).unwrap();

  assert!(vertices.is_empty());
  assert!(indices.is_empty());
}
