//! A Phong-lit cube next to a small cube standing for the light.
//!
//! Shaders are read from `shaders/` and materials from `materials.json`, both under the asset
//! root. Without any material, the cube is rendered in gold.
//!
//! Move with WASD, look around with the mouse and zoom with the scroll wheel. Press <M> / <N> to
//! switch to the next / previous material and <L> to make the light orbit around the cube.
//!
//! Press <escape> to quit or close the window.

use crate::material::{load_materials, set_material, Material};
use crate::shared::{FreeCamera, CLEAR_COLOR, CUBE_STRIDE, CUBE_VERTEX_COUNT, CUBE_VERTICES};
use crate::{Backend, Example, ExampleError, InputAction, LoopFeedback, PlatformServices};
use cgmath::{Matrix4, Point3, SquareMatrix as _, Vector3};
use glint::buffer::{Usage, VertexBuffer};
use glint::context::GraphicsContext;
use glint::render::DepthTest;
use glint::shader::Program;
use glint::vertex_array::{Mode, VertexArray, VertexAttrib};
use glint_windowing::CursorMode;

const LIGHT_START: [f32; 3] = [1.2, 1., 2.];
const LIGHT_SCALE: f32 = 0.2;
const WHITE: [f32; 3] = [1., 1., 1.];

pub struct LocalExample {
  object_program: Program<Backend>,
  light_program: Program<Backend>,
  object_vertex_array: VertexArray<Backend>,
  light_vertex_array: VertexArray<Backend>,
  _vertices: VertexBuffer<Backend, f32>,
  camera: FreeCamera,
  materials: Vec<(String, Material)>,
  current_material: usize,
  animate_light: bool,
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
    let vertex_path = platform.asset_path("shaders/vertex.glsl");
    let mut object_program = Program::from_files(
      context,
      &vertex_path,
      platform.asset_path("shaders/object.fragment.glsl"),
    )?;
    let light_program = Program::from_files(
      context,
      &vertex_path,
      platform.asset_path("shaders/light.fragment.glsl"),
    )?;

    let vertices = context.new_vertex_buffer(&CUBE_VERTICES, Usage::StaticDraw)?;

    let mut light_vertex_array = context.new_vertex_array()?;
    light_vertex_array.set_attribute(&vertices, VertexAttrib::floats(0, 3, CUBE_STRIDE, 0));

    let mut object_vertex_array = context.new_vertex_array()?;
    object_vertex_array.set_attribute(&vertices, VertexAttrib::floats(0, 3, CUBE_STRIDE, 0));
    object_vertex_array.set_attribute(&vertices, VertexAttrib::floats(1, 3, CUBE_STRIDE, 3));
    object_vertex_array.set_attribute(&vertices, VertexAttrib::floats(2, 2, CUBE_STRIDE, 6));

    let materials: Vec<_> = match load_materials(platform.asset_path("materials.json")) {
      Ok(materials) => materials.into_iter().collect(),
      Err(e) => {
        log::warn!("{}", e);
        Vec::new()
      }
    };

    object_program.set_uniform("lightColor", WHITE);

    match materials.first() {
      Some((name, material)) => {
        log::info!("loaded {} materials", materials.len());
        log::info!("starting with material {}", name);
        set_material(&mut object_program, material);
        log::info!("controls: M/N to cycle through materials, L to toggle the light animation");
      }

      None => {
        log::warn!("no materials loaded, using the default gold material");
        set_material(&mut object_program, &Material::gold());
      }
    }

    object_program.set_uniform("light.ambient", WHITE);
    object_program.set_uniform("light.diffuse", WHITE);
    object_program.set_uniform("light.specular", WHITE);

    context.set_depth_test(DepthTest::On);

    Ok(LocalExample {
      object_program,
      light_program,
      object_vertex_array,
      light_vertex_array,
      _vertices: vertices,
      camera: FreeCamera::new(Point3::new(0., 0., 3.)),
      materials,
      current_material: 0,
      animate_light: false,
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

    for action in actions {
      match action {
        InputAction::Quit => return LoopFeedback::Exit,

        InputAction::Resized { width, height } => {
          context.set_viewport(0, 0, width as _, height as _);
          self.camera.resize(width, height);
        }

        InputAction::NextMaterial => {
          self.switch_material(next_index(self.current_material, self.materials.len()))
        }

        InputAction::PreviousMaterial => {
          self.switch_material(previous_index(self.current_material, self.materials.len()))
        }

        InputAction::ToggleLight => {
          self.animate_light = !self.animate_light;
          log::info!(
            "light animation: {}",
            if self.animate_light { "on" } else { "off" }
          );
        }

        action => {
          self.camera.react(action, delta_time);
        }
      }
    }

    let light_pos = light_position(time, self.animate_light);
    let view = self.camera.view();
    let projection = self.camera.projection();

    context.clear(Some(CLEAR_COLOR), true);

    // lit object
    let program = &mut self.object_program;
    program.set_uniform("model", Matrix4::<f32>::identity());
    program.set_uniform("view", view);
    program.set_uniform("projection", projection);
    program.set_uniform("lightPos", light_pos);
    program.set_uniform("viewPos", self.camera.camera().position());
    self
      .object_vertex_array
      .draw_arrays(Mode::Triangles, 0, CUBE_VERTEX_COUNT);

    // light
    let model = Matrix4::from_translation(light_pos) * Matrix4::from_scale(LIGHT_SCALE);
    let program = &mut self.light_program;
    program.set_uniform("model", model);
    program.set_uniform("view", view);
    program.set_uniform("projection", projection);
    self
      .light_vertex_array
      .draw_arrays(Mode::Triangles, 0, CUBE_VERTEX_COUNT);

    LoopFeedback::Continue(self)
  }
}

impl LocalExample {
  // no-op without materials
  fn switch_material(&mut self, index: Option<usize>) {
    let index = match index {
      Some(index) => index,
      None => return,
    };

    if let Some((name, material)) = self.materials.get(index) {
      log::info!("material: {}", name);
      set_material(&mut self.object_program, material);
      self.current_material = index;
    }
  }
}

fn next_index(current: usize, len: usize) -> Option<usize> {
  (len > 0).then(|| (current + 1) % len)
}

fn previous_index(current: usize, len: usize) -> Option<usize> {
  (len > 0).then(|| (current + len - 1) % len)
}

// The light either stays at its starting position or orbits around the Y axis, keeping its
// height and its distance to the axis.
fn light_position(time: f32, animated: bool) -> Vector3<f32> {
  let [x, y, z] = LIGHT_START;

  if animated {
    let radius = (x * x + z * z).sqrt();
    Vector3::new(radius * time.cos(), y, radius * time.sin())
  } else {
    Vector3::new(x, y, z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::InnerSpace as _;

  #[test]
  fn material_indices_wrap_around() {
    assert_eq!(next_index(0, 3), Some(1));
    assert_eq!(next_index(2, 3), Some(0));
    assert_eq!(previous_index(0, 3), Some(2));
    assert_eq!(previous_index(2, 3), Some(1));
    assert_eq!(next_index(0, 1), Some(0));
    assert_eq!(next_index(0, 0), None);
    assert_eq!(previous_index(0, 0), None);
  }

  #[test]
  fn static_light_stays_at_start() {
    assert_eq!(light_position(0., false), Vector3::new(1.2, 1., 2.));
    assert_eq!(light_position(12.3, false), Vector3::new(1.2, 1., 2.));
  }

  #[test]
  fn animated_light_orbits_at_constant_radius() {
    let radius = (1.2f32 * 1.2 + 2. * 2.).sqrt();

    for &t in &[0., 0.5, 1., 2., 3.] {
      let pos = light_position(t, true);
      let horizontal = Vector3::new(pos.x, 0., pos.z);

      assert_eq!(pos.y, 1.);
      assert!((horizontal.magnitude() - radius).abs() < 1e-5);
    }
  }
}
