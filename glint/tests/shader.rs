mod common;

use common::{Kind, MockContext, Value};
use glint::context::GraphicsContext as _;
use glint::shader::{Program, ProgramError, StageError, StageType};
use std::fs;

const VS: &str = "void main() {}";
const FS: &str = "out vec4 frag; void main() { frag = vec4(1.); }";

#[test]
fn stages_released_after_link() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let program = ctx.new_program(VS, FS).unwrap();

  assert_eq!(log.borrow().alive(Kind::Stage), 0);
  assert_eq!(log.borrow().alive(Kind::Program), 1);

  drop(program);
  assert_eq!(log.borrow().alive(Kind::Program), 0);
}

#[test]
fn program_released_once_after_move() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let program = ctx.new_program(VS, FS).unwrap();
  let handle = program.handle();
  let moved = Box::new(program);

  assert_eq!(log.borrow().destroy_count(handle), 0);

  drop(moved);
  assert_eq!(log.borrow().destroy_count(handle), 1);
}

#[test]
fn reassignment_releases_previous_program() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let mut program = ctx.new_program(VS, FS).unwrap();
  let first = program.handle();

  program = ctx.new_program(VS, FS).unwrap();
  let second = program.handle();

  assert_ne!(first, second);
  assert_eq!(log.borrow().destroy_count(first), 1);
  assert_eq!(log.borrow().destroy_count(second), 0);

  drop(program);
  assert_eq!(log.borrow().destroy_count(second), 1);
  assert_eq!(log.borrow().alive(Kind::Program), 0);
}

#[test]
fn compilation_failure_releases_compiled_stages() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let result = ctx.new_program(VS, "syntax error");

  match result {
    Err(ProgramError::StageError(StageError::CompilationFailed(ty, reason))) => {
      assert_eq!(ty, StageType::FragmentShader);
      assert!(reason.contains("syntax error"));
    }
    other => panic!("unexpected result: {:?}", other),
  }

  assert_eq!(log.borrow().alive(Kind::Stage), 0);
  assert_eq!(log.borrow().alive(Kind::Program), 0);
}

#[test]
fn link_failure_releases_stages() {
  let mut ctx = MockContext::new();
  let log = ctx.log();

  let result = ctx.new_program(VS, "// link error");

  assert!(matches!(result, Err(ProgramError::LinkFailed(_))));
  assert_eq!(log.borrow().alive(Kind::Stage), 0);
}

#[test]
fn uniform_location_resolved_once() {
  let mut ctx = MockContext::with_uniforms(&["model", "view"]);
  let log = ctx.log();
  let mut program = ctx.new_program(VS, FS).unwrap();

  program.set_uniform("view", 1.5f32);
  program.set_uniform("view", 2.5f32);

  let handle = program.handle();
  let log = log.borrow();

  assert_eq!(log.lookups, vec!["view".to_owned()]);
  assert_eq!(
    log.writes,
    vec![(handle, 1, Value::Float(1.5)), (handle, 1, Value::Float(2.5))]
  );
  assert_eq!(log.current_program, handle);
}

#[test]
fn inactive_uniform_is_cached_and_skipped() {
  let mut ctx = MockContext::with_uniforms(&["model"]);
  let log = ctx.log();
  let mut program = ctx.new_program(VS, FS).unwrap();

  assert_eq!(program.uniform_location("shininess"), -1);
  program.set_uniform("shininess", 32f32);
  program.set_uniform("shininess", 64f32);

  assert_eq!(log.borrow().lookups, vec!["shininess".to_owned()]);
  assert!(log.borrow().writes.is_empty());
}

#[test]
fn uniform_caches_are_per_program() {
  let mut ctx = MockContext::with_uniforms(&["color"]);
  let log = ctx.log();
  let mut a = ctx.new_program(VS, FS).unwrap();
  let mut b = ctx.new_program(VS, FS).unwrap();

  a.set_uniform("color", [1f32, 0., 0.]);
  b.set_uniform("color", cgmath::Vector3::new(0f32, 1., 0.));
  a.set_uniform("color", [0f32, 0., 1.]);

  let log = log.borrow();
  assert_eq!(log.lookups.len(), 2);
  assert_eq!(
    log.writes,
    vec![
      (a.handle(), 0, Value::Vec3([1., 0., 0.])),
      (b.handle(), 0, Value::Vec3([0., 1., 0.])),
      (a.handle(), 0, Value::Vec3([0., 0., 1.])),
    ]
  );
}

#[test]
fn program_from_files() {
  let dir = std::env::temp_dir().join(format!("glint-shader-test-{}", std::process::id()));
  fs::create_dir_all(&dir).unwrap();
  let vs_path = dir.join("vs.glsl");
  let fs_path = dir.join("fs.glsl");
  fs::write(&vs_path, VS).unwrap();
  fs::write(&fs_path, FS).unwrap();

  let mut ctx = MockContext::new();
  let program = Program::from_files(&mut ctx, &vs_path, &fs_path);
  assert!(program.is_ok());

  let missing = Program::from_files(&mut ctx, &vs_path, dir.join("missing.glsl"));
  match missing {
    Err(ProgramError::SourceUnreadable { path, .. }) => assert!(path.ends_with("missing.glsl")),
    other => panic!("unexpected result: {:?}", other),
  }

  // nothing was compiled for the failed program
  assert_eq!(ctx.log().borrow().alive(Kind::Program), 1);

  fs::remove_dir_all(&dir).unwrap();
}
