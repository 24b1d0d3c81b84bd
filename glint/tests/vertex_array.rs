mod common;

use common::{Kind, MockContext};
use glint::buffer::Usage;
use glint::context::GraphicsContext as _;
use glint::render::DepthTest;
use glint::vertex_array::{Mode, VertexAttrib};

#[test]
fn attributes_and_draws() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  // position + texture coordinates, interleaved
  let vertices = ctx
    .new_vertex_buffer(&[0f32; 5 * 4], Usage::StaticDraw)
    .unwrap();
  let indices = ctx
    .new_element_buffer(&[0, 1, 3, 1, 2, 3], Usage::StaticDraw)
    .unwrap();
  let mut vertex_array = ctx.new_vertex_array().unwrap();

  vertex_array.set_attribute(&vertices, VertexAttrib::floats(0, 3, 5, 0));
  vertex_array.set_attribute(&vertices, VertexAttrib::floats(1, 2, 5, 3));
  vertex_array.set_element_buffer(&indices);
  vertex_array.draw_elements(Mode::Triangles, 0, indices.count());
  vertex_array.draw_arrays(Mode::Points, 1, 2);

  let va = vertex_array.handle();
  let vb = vertices.handle();
  let calls = log.borrow();

  assert_eq!(
    calls.attributes,
    vec![
      (
        va,
        vb,
        VertexAttrib {
          index: 0,
          components: 3,
          stride: 20,
          offset: 0
        }
      ),
      (
        va,
        vb,
        VertexAttrib {
          index: 1,
          components: 2,
          stride: 20,
          offset: 12
        }
      ),
    ]
  );
  assert_eq!(calls.element_buffers, vec![(va, indices.handle())]);
  assert_eq!(
    calls.draws,
    vec![
      (va, Mode::Triangles, 0, 6, true),
      (va, Mode::Points, 1, 2, false)
    ]
  );
  drop(calls);

  drop(vertex_array);
  assert_eq!(log.borrow().alive(Kind::VertexArray), 0);
  assert_eq!(log.borrow().alive(Kind::Buffer), 2);
}

#[test]
fn vertex_array_released_once_after_move() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let vertex_array = ctx.new_vertex_array().unwrap();
  let handle = vertex_array.handle();
  let moved = Some(vertex_array);

  assert_eq!(log.borrow().destroy_count(handle), 0);

  drop(moved);
  assert_eq!(log.borrow().destroy_count(handle), 1);
}

#[test]
fn reassignment_releases_previous_vertex_array() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let mut vertex_array = ctx.new_vertex_array().unwrap();
  let first = vertex_array.handle();

  vertex_array = ctx.new_vertex_array().unwrap();
  let second = vertex_array.handle();

  assert_ne!(first, second);
  assert_eq!(log.borrow().destroy_count(first), 1);
  assert_eq!(log.borrow().destroy_count(second), 0);
  assert_eq!(log.borrow().alive(Kind::VertexArray), 1);

  drop(vertex_array);
  assert_eq!(log.borrow().destroy_count(second), 1);
}

#[test]
fn render_state() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  ctx.set_viewport(0, 0, 800, 600);
  ctx.set_depth_test(DepthTest::On);
  ctx.clear(Some([0.2, 0.3, 0.3, 1.]), true);
  ctx.clear(None, true);

  let log = log.borrow();
  assert_eq!(log.viewport, Some([0, 0, 800, 600]));
  assert_eq!(log.depth_test, Some(DepthTest::On));
  assert_eq!(log.clear_color, Some([0.2, 0.3, 0.3, 1.]));
  assert_eq!(log.clears, vec![(true, true), (false, true)]);
}
