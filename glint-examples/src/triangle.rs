//! A quad made of two indexed triangles, each one drawn with its own program.
//!
//! Both triangles share the same vertex array and element buffer: the first one is drawn with
//! the first three indices, the second one with the next three.
//!
//! Press <escape> to quit or close the window.

use crate::shared::CLEAR_COLOR;
use crate::{Backend, Example, ExampleError, InputAction, LoopFeedback, PlatformServices};
use glint::buffer::{ElementBuffer, Usage, VertexBuffer};
use glint::context::GraphicsContext;
use glint::shader::Program;
use glint::vertex_array::{Mode, VertexArray, VertexAttrib};

const VS: &str = include_str!("triangle-vs.glsl");
const ORANGE_FS: &str = include_str!("triangle-orange-fs.glsl");
const YELLOW_FS: &str = include_str!("triangle-yellow-fs.glsl");

#[rustfmt::skip]
const VERTICES: [f32; 12] = [
   0.5,  0.5, 0.0, // top right
   0.5, -0.5, 0.0, // bottom right
  -0.5, -0.5, 0.0, // bottom left
  -0.5,  0.5, 0.0, // top left
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

pub struct LocalExample {
  orange: Program<Backend>,
  yellow: Program<Backend>,
  vertex_array: VertexArray<Backend>,
  // the vertex array reads from them, they must live as long as it does
  _vertices: VertexBuffer<Backend, f32>,
  _indices: ElementBuffer<Backend>,
}

impl Example for LocalExample {
  fn bootstrap(
    _: &mut impl PlatformServices,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<Self, ExampleError> {
    let orange = context.new_program(VS, ORANGE_FS)?;
    let yellow = context.new_program(VS, YELLOW_FS)?;

    let vertices = context.new_vertex_buffer(&VERTICES, Usage::StaticDraw)?;
    let indices = context.new_element_buffer(&INDICES, Usage::StaticDraw)?;

    let mut vertex_array = context.new_vertex_array()?;
    vertex_array.set_attribute(&vertices, VertexAttrib::floats(0, 3, 3, 0));
    vertex_array.set_element_buffer(&indices);

    Ok(LocalExample {
      orange,
      yellow,
      vertex_array,
      _vertices: vertices,
      _indices: indices,
    })
  }

  fn render_frame(
    self,
    _: f32,
    actions: impl Iterator<Item = InputAction>,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> LoopFeedback<Self> {
    for action in actions {
      match action {
        InputAction::Quit => return LoopFeedback::Exit,
        InputAction::Resized { width, height } => {
          context.set_viewport(0, 0, width as _, height as _)
        }
        _ => (),
      }
    }

    context.clear(Some(CLEAR_COLOR), false);

    self.orange.use_program();
    self.vertex_array.draw_elements(Mode::Triangles, 0, 3);

    self.yellow.use_program();
    self.vertex_array.draw_elements(Mode::Triangles, 3, 3);

    LoopFeedback::Continue(self)
  }
}
