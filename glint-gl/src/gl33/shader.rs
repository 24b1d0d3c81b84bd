use crate::gl33::{state::GLState, GL33};
use cgmath::{Matrix4, Point3, Vector2, Vector3, Vector4};
use gl::types::*;
use glint::backend::shader::{Shader, Uniformable};
use glint::shader::{ProgramError, StageError, StageType};
use std::{
  cell::RefCell,
  ffi::CString,
  ptr::{null, null_mut},
  rc::Rc,
};

#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
}

#[derive(Debug)]
pub struct Program {
  pub(crate) handle: GLuint,
  state: Rc<RefCell<GLState>>,
}

impl Program {
  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        let mut log_len: GLint = 0;
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
        gl::GetProgramInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

        Err(ProgramError::link_failed(info_log(&log)))
      }
    }
  }
}

unsafe impl Shader for GL33 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let c_src = CString::new(src.as_bytes())
      .map_err(|_| StageError::compilation_failed(ty, "source contains a NUL byte"))?;

    let handle = gl::CreateShader(opengl_shader_type(ty));

    if handle == 0 {
      return Err(StageError::compilation_failed(
        ty,
        "unable to create shader stage",
      ));
    }

    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled: GLint = gl::FALSE.into();
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == gl::TRUE.into() {
      Ok(Stage { handle })
    } else {
      let mut log_len: GLint = 0;
      gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

      let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
      gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

      gl::DeleteShader(handle);

      Err(StageError::compilation_failed(ty, info_log(&log)))
    }
  }

  unsafe fn destroy_stage(stage: &mut Self::StageRepr) {
    gl::DeleteShader(stage.handle);
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = gl::CreateProgram();

    if handle == 0 {
      return Err(ProgramError::CannotCreate);
    }

    gl::AttachShader(handle, vertex.handle);
    gl::AttachShader(handle, fragment.handle);

    let program = Program {
      handle,
      state: self.state.clone(),
    };
    let linked = program.link();

    gl::DetachShader(handle, vertex.handle);
    gl::DetachShader(handle, fragment.handle);

    match linked {
      Ok(_) => Ok(program),

      Err(e) => {
        gl::DeleteProgram(handle);
        Err(e)
      }
    }
  }

  unsafe fn destroy_program(program: &mut Self::ProgramRepr) {
    program.state.borrow_mut().forget_program(program.handle);
    gl::DeleteProgram(program.handle);
  }

  unsafe fn use_program(program: &Self::ProgramRepr) {
    program.state.borrow_mut().use_program(program.handle);
  }

  unsafe fn uniform_location(program: &Self::ProgramRepr, name: &str) -> i32 {
    match CString::new(name.as_bytes()) {
      Ok(c_name) => gl::GetUniformLocation(program.handle, c_name.as_ptr() as *const GLchar),
      Err(_) => -1,
    }
  }

  unsafe fn program_handle(program: &Self::ProgramRepr) -> u32 {
    program.handle
  }
}

fn opengl_shader_type(t: StageType) -> GLenum {
  match t {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

// info logs are NUL-terminated
fn info_log(log: &[u8]) -> String {
  let end = log.iter().position(|&b| b == 0).unwrap_or(log.len());
  String::from_utf8_lossy(&log[..end]).into_owned()
}

macro_rules! impl_Uniformable {
  (vec $t:ty, $f:tt) => {
    unsafe impl Uniformable<$t> for GL33 {
      unsafe fn update(_: &Program, location: i32, value: $t) {
        gl::$f(location, 1, value.as_ptr() as _);
      }
    }
  };

  // cgmath types, exposing their components as an array
  (cgmath $t:ty, $arr:ty, $f:tt) => {
    unsafe impl Uniformable<$t> for GL33 {
      unsafe fn update(_: &Program, location: i32, value: $t) {
        let value: &$arr = value.as_ref();
        gl::$f(location, 1, value.as_ptr() as _);
      }
    }
  };

  (mat $t:ty, $arr:ty, $f:tt) => {
    unsafe impl Uniformable<$t> for GL33 {
      unsafe fn update(_: &Program, location: i32, value: $t) {
        let value: &$arr = value.as_ref();
        gl::$f(location, 1, gl::FALSE, value.as_ptr() as _);
      }
    }
  };

  ($t:ty, $f:tt) => {
    unsafe impl Uniformable<$t> for GL33 {
      unsafe fn update(_: &Program, location: i32, value: $t) {
        gl::$f(location, value);
      }
    }
  };
}

impl_Uniformable!(i32, Uniform1i);
impl_Uniformable!(f32, Uniform1f);

impl_Uniformable!(vec [f32; 2], Uniform2fv);
impl_Uniformable!(vec [f32; 3], Uniform3fv);
impl_Uniformable!(vec [f32; 4], Uniform4fv);

impl_Uniformable!(cgmath Vector2<f32>, [f32; 2], Uniform2fv);
impl_Uniformable!(cgmath Vector3<f32>, [f32; 3], Uniform3fv);
impl_Uniformable!(cgmath Vector4<f32>, [f32; 4], Uniform4fv);
impl_Uniformable!(cgmath Point3<f32>, [f32; 3], Uniform3fv);

impl_Uniformable!(mat Matrix4<f32>, [f32; 16], UniformMatrix4fv);

unsafe impl Uniformable<[[f32; 4]; 4]> for GL33 {
  unsafe fn update(_: &Program, location: i32, value: [[f32; 4]; 4]) {
    gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr() as _);
  }
}

unsafe impl Uniformable<bool> for GL33 {
  unsafe fn update(_: &Program, location: i32, value: bool) {
    gl::Uniform1i(location, value as GLint);
  }
}
