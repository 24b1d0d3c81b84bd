//! Ten spinning cubes mixing two textures.
//!
//! The textures are `container.jpg` and `awesomeface.png`, read from the asset root. A missing
//! texture is replaced by a checkerboard.
//!
//! Move with WASD, look around with the mouse and zoom with the scroll wheel. Hold <up> / <down>
//! to blend towards the second / first texture.
//!
//! Press <escape> to quit or close the window.

use crate::shared::{FreeCamera, CLEAR_COLOR, CUBE_STRIDE, CUBE_VERTEX_COUNT, CUBE_VERTICES};
use crate::{Backend, Example, ExampleError, InputAction, LoopFeedback, PlatformServices};
use cgmath::{Deg, InnerSpace as _, Matrix4, Point3, Vector3};
use glint::buffer::{Usage, VertexBuffer};
use glint::context::GraphicsContext;
use glint::pixel::PixelFormat;
use glint::render::DepthTest;
use glint::shader::Program;
use glint::texture::{Flip, Image, Texture, TextureError};
use glint::vertex_array::{Mode, VertexArray, VertexAttrib};
use glint_windowing::CursorMode;

const VS: &str = include_str!("textured-cubes-vs.glsl");
const FS: &str = include_str!("textured-cubes-fs.glsl");

const BLEND_FACTOR: f32 = 0.2;
const BLEND_STEP: f32 = 0.005;

const CUBE_POSITIONS: [[f32; 3]; 10] = [
  [0., 0., 0.],
  [2., 5., -15.],
  [-1.5, -2.2, -2.5],
  [-3.8, -2., -12.3],
  [2.4, -0.4, -3.5],
  [-1.7, 3., -7.5],
  [1.3, -2., -2.5],
  [1.5, 2., -2.5],
  [1.5, 0.2, -1.5],
  [-1.3, 1., -1.5],
];

pub struct LocalExample {
  program: Program<Backend>,
  vertex_array: VertexArray<Backend>,
  _vertices: VertexBuffer<Backend, f32>,
  container: Texture<Backend>,
  face: Texture<Backend>,
  camera: FreeCamera,
  blend_factor: f32,
  last_time: f32,
}

impl Example for LocalExample {
  fn cursor_mode() -> CursorMode {
    CursorMode::Disabled
  }

  fn bootstrap(
    platform: &mut impl PlatformServices,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> Result<Self, ExampleError> {
    let mut program = context.new_program(VS, FS)?;

    let vertices = context.new_vertex_buffer(&CUBE_VERTICES, Usage::StaticDraw)?;
    let mut vertex_array = context.new_vertex_array()?;
    vertex_array.set_attribute(&vertices, VertexAttrib::floats(0, 3, CUBE_STRIDE, 0));
    vertex_array.set_attribute(&vertices, VertexAttrib::floats(1, 2, CUBE_STRIDE, 6));

    let container = load_or_checkerboard(platform, context, "container.jpg")?;
    let face = load_or_checkerboard(platform, context, "awesomeface.png")?;

    program.set_uniform("texture1", 0i32);
    program.set_uniform("texture2", 1i32);
    program.set_uniform("blendFactor", BLEND_FACTOR);

    context.set_depth_test(DepthTest::On);

    Ok(LocalExample {
      program,
      vertex_array,
      _vertices: vertices,
      container,
      face,
      camera: FreeCamera::new(Point3::new(0., 0., 3.)),
      blend_factor: BLEND_FACTOR,
      last_time: 0.,
    })
  }

  fn render_frame(
    mut self,
    time: f32,
    actions: impl Iterator<Item = InputAction>,
    context: &mut impl GraphicsContext<Backend = Backend>,
  ) -> LoopFeedback<Self> {
    let delta_time = time - self.last_time;
    self.last_time = time;

    let blend_factor = self.blend_factor;

    for action in actions {
      match action {
        InputAction::Quit => return LoopFeedback::Exit,

        InputAction::Resized { width, height } => {
          context.set_viewport(0, 0, width as _, height as _);
          self.camera.resize(width, height);
        }

        InputAction::Up => self.blend_factor = (self.blend_factor + BLEND_STEP).min(1.),
        InputAction::Down => self.blend_factor = (self.blend_factor - BLEND_STEP).max(0.),

        action => {
          self.camera.react(action, delta_time);
        }
      }
    }

    if self.blend_factor != blend_factor {
      log::debug!("blend factor: {}", self.blend_factor);
      self
        .program
        .set_uniform("blendFactor", self.blend_factor);
    }

    context.clear(Some(CLEAR_COLOR), true);

    self.container.bind(0);
    self.face.bind(1);

    self.program.set_uniform("view", self.camera.view());
    self.program.set_uniform("projection", self.camera.projection());

    let axis = Vector3::new(1., 0.3, 0.5).normalize();

    for (i, position) in CUBE_POSITIONS.iter().enumerate() {
      let angle = Deg(20. * i as f32 + 50. * time);
      let model = Matrix4::from_translation(Vector3::from(*position))
        * Matrix4::from_axis_angle(axis, angle);

      self.program.set_uniform("model", model);
      self
        .vertex_array
        .draw_arrays(Mode::Triangles, 0, CUBE_VERTEX_COUNT);
    }

    LoopFeedback::Continue(self)
  }
}

// Load a texture from the asset root, falling back to a checkerboard if it cannot be decoded.
fn load_or_checkerboard(
  platform: &mut impl PlatformServices,
  context: &mut impl GraphicsContext<Backend = Backend>,
  name: &str,
) -> Result<Texture<Backend>, ExampleError> {
  let path = platform.asset_path(name);

  match context.load_texture(&path, PixelFormat::RGB, Flip::Vertically) {
    Err(TextureError::Decode { .. }) => {
      log::warn!("using a checkerboard in place of {}", name);
      let image = checkerboard(64, 8)?;
      Ok(Texture::from_image(context, &image, PixelFormat::RGB)?)
    }

    texture => Ok(texture?),
  }
}

// Square RGB checkerboard of `size` pixels, made of `cell`-pixel wide cells.
fn checkerboard(size: u32, cell: u32) -> Result<Image, TextureError> {
  let texels = (0..size)
    .flat_map(|y| (0..size).map(move |x| (x / cell + y / cell) % 2 == 0))
    .flat_map(|light| if light { [0xe0; 3] } else { [0x40; 3] })
    .collect();

  Image::from_raw(size, size, 3, texels)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn checkerboard_alternates_cells() {
    let image = checkerboard(4, 2).unwrap();
    let texel = |x: usize, y: usize| image.texels()[(y * 4 + x) * 3];

    assert_eq!(image.channels(), 3);
    assert_eq!(image.texels().len(), 4 * 4 * 3);
    assert_eq!(texel(0, 0), 0xe0);
    assert_eq!(texel(1, 1), 0xe0);
    assert_eq!(texel(2, 0), 0x40);
    assert_eq!(texel(0, 2), 0x40);
    assert_eq!(texel(3, 3), 0xe0);
  }
}
