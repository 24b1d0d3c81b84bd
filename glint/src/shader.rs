//! Shader stages and programs.
//!
//! A [`Program`] is built out of a vertex and a fragment source, either given as strings
//! ([`Program::new`]) or read from files ([`Program::from_files`]). The intermediate [`Stage`]s
//! are released as soon as the program is linked, whether linking succeeded or not.
//!
//! # Uniforms
//!
//! Uniforms are set by name with [`Program::set_uniform`]. The first time a name is used, its
//! location is asked to the driver and cached in the program, including the `-1` location of
//! inactive uniforms, so that a name is never resolved twice. Setting an inactive uniform does
//! nothing.
//!
//! Setting a uniform makes the program the current one first. The supported types are listed by
//! the implementors of [`backend::shader::Uniformable`].
//!
//! [`backend::shader::Uniformable`]: crate::backend::shader::Uniformable

use crate::backend::shader::{Shader, Uniformable};
use crate::context::GraphicsContext;
use std::collections::HashMap;
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// Occurs when a shader fails to compile.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Occurs when a shader fails to compile.
  pub fn compilation_failed(ty: StageType, reason: impl Into<String>) -> Self {
    StageError::CompilationFailed(ty, reason.into())
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CompilationFailed(ref ty, ref r) => write!(f, "{} compilation error: {}", ty, r),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[non_exhaustive]
#[derive(Debug)]
pub enum ProgramError {
  /// A shader source file could not be read.
  SourceUnreadable {
    /// Path of the file.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },
  /// A shader stage failed to compile.
  StageError(StageError),
  /// The program failed to link.
  LinkFailed(String),
  /// The driver could not give a new program handle.
  CannotCreate,
}

impl ProgramError {
  /// The program failed to link.
  pub fn link_failed(reason: impl Into<String>) -> Self {
    ProgramError::LinkFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::SourceUnreadable { ref path, ref source } => {
        write!(f, "cannot read shader source {}: {}", path.display(), source)
      }
      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),
      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),
      ProgramError::CannotCreate => f.write_str("cannot create shader program"),
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::SourceUnreadable { source, .. } => Some(source),
      ProgramError::StageError(e) => Some(e),
      _ => None,
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

/// A compiled shader stage.
///
/// Stages only live long enough to be linked into a [`Program`].
#[derive(Debug)]
pub struct Stage<B>
where
  B: ?Sized + Shader,
{
  repr: B::StageRepr,
}

impl<B> Drop for Stage<B>
where
  B: ?Sized + Shader,
{
  fn drop(&mut self) {
    unsafe { B::destroy_stage(&mut self.repr) };
  }
}

impl<B> Stage<B>
where
  B: ?Sized + Shader,
{
  /// Compile a new stage of type `ty` from `src`.
  pub fn new<C>(ctx: &mut C, ty: StageType, src: &str) -> Result<Self, StageError>
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().new_stage(ty, src).map(|repr| Stage { repr }) }
  }
}

/// A shader program.
///
/// The program owns its handle and its uniform-location cache; both move together and die
/// together.
#[derive(Debug)]
pub struct Program<B>
where
  B: ?Sized + Shader,
{
  repr: B::ProgramRepr,
  uniforms: HashMap<String, i32>,
}

impl<B> Drop for Program<B>
where
  B: ?Sized + Shader,
{
  fn drop(&mut self) {
    unsafe { B::destroy_program(&mut self.repr) };
  }
}

impl<B> Program<B>
where
  B: ?Sized + Shader,
{
  /// Compile a vertex and a fragment stage and link them into a new program.
  ///
  /// Compilation and link diagnostics are logged at the error level and returned.
  ///
  /// # Notes
  ///
  /// You might be interested in the [`GraphicsContext::new_program`] function instead, which is
  /// the exact same function, but benefits from more type inference.
  pub fn new<C>(ctx: &mut C, vertex_src: &str, fragment_src: &str) -> Result<Self, ProgramError>
  where
    C: GraphicsContext<Backend = B>,
  {
    Self::build(ctx, vertex_src, fragment_src).map_err(|e| {
      log::error!("{}", e);
      e
    })
  }

  /// Read a vertex and a fragment source from files and build a program out of them.
  ///
  /// Both files are read in full before anything is compiled. A file that cannot be read is
  /// reported as [`ProgramError::SourceUnreadable`].
  pub fn from_files<C>(
    ctx: &mut C,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
  ) -> Result<Self, ProgramError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let vertex_src = read_source(vertex_path.as_ref())?;
    let fragment_src = read_source(fragment_path.as_ref())?;

    Self::new(ctx, &vertex_src, &fragment_src)
  }

  fn build<C>(ctx: &mut C, vertex_src: &str, fragment_src: &str) -> Result<Self, ProgramError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let vertex = Stage::new(ctx, StageType::VertexShader, vertex_src)?;
    let fragment = Stage::new(ctx, StageType::FragmentShader, fragment_src)?;

    // stages are dropped at the end of this function, linked or not
    let repr = unsafe { ctx.backend().new_program(&vertex.repr, &fragment.repr)? };

    Ok(Program {
      repr,
      uniforms: HashMap::new(),
    })
  }

  /// Make this program the current one.
  pub fn use_program(&self) {
    unsafe { B::use_program(&self.repr) }
  }

  /// Resolve the location of a uniform.
  ///
  /// The driver is only asked the first time a given name is resolved. Inactive uniforms resolve
  /// to `-1`.
  pub fn uniform_location(&mut self, name: &str) -> i32 {
    if let Some(&location) = self.uniforms.get(name) {
      return location;
    }

    let location = unsafe { B::uniform_location(&self.repr, name) };

    if location < 0 {
      log::warn!("inactive uniform: {}", name);
    } else {
      log::debug!("uniform {} resolved at location {}", name, location);
    }

    self.uniforms.insert(name.to_owned(), location);
    location
  }

  /// Set the value of a uniform.
  ///
  /// The program becomes the current one. Setting a uniform that is not active in the program is
  /// a no-op.
  pub fn set_uniform<T>(&mut self, name: &str, value: T)
  where
    B: Uniformable<T>,
  {
    let location = self.uniform_location(name);

    if location < 0 {
      return;
    }

    unsafe {
      B::use_program(&self.repr);
      B::update(&self.repr, location, value);
    }
  }

  /// Handle of the program.
  pub fn handle(&self) -> u32 {
    unsafe { B::program_handle(&self.repr) }
  }
}

fn read_source(path: &Path) -> Result<String, ProgramError> {
  fs::read_to_string(path).map_err(|source| {
    log::error!("cannot read shader source {}: {}", path.display(), source);

    ProgramError::SourceUnreadable {
      path: path.to_owned(),
      source,
    }
  })
}
