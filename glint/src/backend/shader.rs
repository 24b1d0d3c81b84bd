//! Shader backend.

use crate::shader::{ProgramError, StageError, StageType};

/// Shader backend.
///
/// Covers shader stages, the programs linked out of them and the resolution of uniform names.
pub unsafe trait Shader {
  /// Backend representation of a shader stage.
  type StageRepr;

  /// Backend representation of a linked program.
  type ProgramRepr;

  /// Compile a new shader stage.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Release a shader stage.
  unsafe fn destroy_stage(stage: &mut Self::StageRepr);

  /// Link a program out of a vertex and a fragment stage.
  ///
  /// The stages are still owned by the caller once this function returns, whatever its result.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Release a program.
  unsafe fn destroy_program(program: &mut Self::ProgramRepr);

  /// Make the program the current one.
  unsafe fn use_program(program: &Self::ProgramRepr);

  /// Ask the driver for the location of a uniform.
  ///
  /// Return `-1` if the uniform is not active in the program.
  unsafe fn uniform_location(program: &Self::ProgramRepr, name: &str) -> i32;

  /// Handle of the program.
  unsafe fn program_handle(program: &Self::ProgramRepr) -> u32;
}

/// Types that can be sent to a uniform.
pub unsafe trait Uniformable<T>: Shader {
  /// Write `value` at `location` in `program`.
  ///
  /// The program is guaranteed to be the current one and `location` to be a valid location.
  unsafe fn update(program: &Self::ProgramRepr, location: i32, value: T);
}
