//! Phong materials and the material file.
//!
//! The material file looks like JSON but is read line by line with a few heuristics, so its layout
//! matters: one field per line, a material starting on a line such as `"gold": {`, and the
//! `shininess` field coming last in each material.
//!
//! ```text
//! {
//!   "gold": {
//!     "ambient": [0.24725, 0.1995, 0.0745],
//!     "diffuse": [0.75164, 0.60648, 0.22648],
//!     "specular": [0.628281, 0.555802, 0.366065],
//!     "shininess": 0.4
//!   }
//! }
//! ```
//!
//! Fields are accumulated across materials: a material omitting a color keeps the one of the
//! material read before it.

use cgmath::Vector3;
use glint::backend::shader::{Shader, Uniformable};
use glint::shader::Program;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{error, fmt, fs, io};

/// Shininess values of the file are multiplied by this before reaching shaders.
pub const SHININESS_SCALE: f32 = 128.;

/// Phong material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
  pub ambient: Vector3<f32>,
  pub diffuse: Vector3<f32>,
  pub specular: Vector3<f32>,
  pub shininess: f32,
}

// `Vector3` has no `Default` impl; this matches what `#[derive(Default)]` would produce.
impl Default for Material {
  fn default() -> Self {
    Material {
      ambient: Vector3::new(0., 0., 0.),
      diffuse: Vector3::new(0., 0., 0.),
      specular: Vector3::new(0., 0., 0.),
      shininess: 0.,
    }
  }
}

impl Material {
  /// Material used when no material file could be loaded.
  pub fn gold() -> Self {
    Material {
      ambient: Vector3::new(0.24725, 0.1995, 0.0745),
      diffuse: Vector3::new(0.75164, 0.60648, 0.22648),
      specular: Vector3::new(0.628281, 0.555802, 0.366065),
      shininess: 0.4,
    }
  }
}

/// Errors that might happen while loading materials.
#[non_exhaustive]
#[derive(Debug)]
pub enum MaterialError {
  /// The material file could not be read.
  Io { path: PathBuf, source: io::Error },
  /// A value is not a number.
  InvalidNumber { line: usize, value: String },
}

impl fmt::Display for MaterialError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      MaterialError::Io { ref path, ref source } => {
        write!(f, "cannot read materials from {}: {}", path.display(), source)
      }

      MaterialError::InvalidNumber { line, ref value } => {
        write!(f, "line {}: invalid number {:?}", line, value)
      }
    }
  }
}

impl error::Error for MaterialError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      MaterialError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Read and parse a material file.
pub fn load_materials(path: impl AsRef<Path>) -> Result<BTreeMap<String, Material>, MaterialError> {
  let path = path.as_ref();
  let src = fs::read_to_string(path).map_err(|source| MaterialError::Io {
    path: path.to_owned(),
    source,
  })?;

  parse_materials(&src)
}

/// Parse the content of a material file.
pub fn parse_materials(src: &str) -> Result<BTreeMap<String, Material>, MaterialError> {
  let mut materials = BTreeMap::new();
  let mut name = String::new();
  let mut material = Material::default();

  for (i, line) in src.lines().enumerate() {
    let line_nb = i + 1;

    if line.contains("\": {") {
      name = material_name(line).to_owned();
    } else if line.contains("\"ambient\":") {
      parse_color(line, line_nb, &mut material.ambient)?;
    } else if line.contains("\"diffuse\":") {
      parse_color(line, line_nb, &mut material.diffuse)?;
    } else if line.contains("\"specular\":") {
      parse_color(line, line_nb, &mut material.specular)?;
    } else if line.contains("\"shininess\":") {
      let (_, value) = line.split_once(':').unwrap_or_default();
      let value = value
        .trim_start_matches(|c| c == ' ' || c == '\t')
        .trim_end_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | ','));
      material.shininess = parse_number(value, line_nb)?;

      // shininess closes a material
      if !name.is_empty() {
        materials.insert(name.clone(), material);
      }
    }
  }

  Ok(materials)
}

// text between the first two double quotes
fn material_name(line: &str) -> &str {
  let start = line.find('"').map_or(0, |i| i + 1);
  let rest = &line[start..];

  rest.find('"').map_or(rest, |end| &rest[..end])
}

// up to three comma-separated numbers between brackets
fn parse_color(line: &str, line_nb: usize, color: &mut Vector3<f32>) -> Result<(), MaterialError> {
  let start = line.find('[').map_or(0, |i| i + 1);
  let values = match line.find(']') {
    Some(end) if end >= start => &line[start..end],
    _ => &line[start..],
  };

  for (i, value) in values.split_terminator(',').take(3).enumerate() {
    color[i] = parse_number(value.trim(), line_nb)?;
  }

  Ok(())
}

fn parse_number(value: &str, line: usize) -> Result<f32, MaterialError> {
  value.trim().parse().map_err(|_| MaterialError::InvalidNumber {
    line,
    value: value.to_owned(),
  })
}

/// Send a material to the `material` uniform of a program.
///
/// The shininess is scaled by [`SHININESS_SCALE`].
pub fn set_material<B>(program: &mut Program<B>, material: &Material)
where
  B: ?Sized + Shader + Uniformable<Vector3<f32>> + Uniformable<f32>,
{
  program.set_uniform("material.ambient", material.ambient);
  program.set_uniform("material.diffuse", material.diffuse);
  program.set_uniform("material.specular", material.specular);
  program.set_uniform("material.shininess", material.shininess * SHININESS_SCALE);

  let Material {
    ambient: a,
    diffuse: d,
    specular: s,
    shininess,
  } = *material;
  log::info!("ambient: {}, {}, {}", a.x, a.y, a.z);
  log::info!("diffuse: {}, {}, {}", d.x, d.y, d.z);
  log::info!("specular: {}, {}, {}", s.x, s.y, s.z);
  log::info!("shininess: {}, {}", shininess, shininess * SHININESS_SCALE);
}

#[cfg(test)]
mod tests {
  use super::*;

  const GOLD: &str = r#"{
  "gold": {
    "ambient": [0.24725, 0.1995, 0.0745],
    "diffuse": [0.75164, 0.60648, 0.22648],
    "specular": [0.628281, 0.555802, 0.366065],
    "shininess": 0.4
  }
}"#;

  #[test]
  fn gold_block() {
    let materials = parse_materials(GOLD).unwrap();

    assert_eq!(materials.len(), 1);
    assert_eq!(materials["gold"], Material::gold());
  }

  #[test]
  fn bare_gold_entry_with_trailing_comma() {
    let src = r#""gold": {
  "ambient": [0.24725, 0.1995, 0.0745],
  "diffuse": [0.75164, 0.60648, 0.22648],
  "specular": [0.628281, 0.555802, 0.366065],
  "shininess": 0.4,
}"#;
    let materials = parse_materials(src).unwrap();

    assert_eq!(materials.len(), 1);
    assert_eq!(materials["gold"], Material::gold());
  }

  #[test]
  fn materials_are_sorted_and_accumulated() {
    let src = "{\n\
      \t\"silver\": {\n\
      \t\t\"ambient\": [0.19225, 0.19225, 0.19225],\n\
      \t\t\"diffuse\": [0.50754, 0.50754, 0.50754],\n\
      \t\t\"specular\": [0.508273, 0.508273, 0.508273],\n\
      \t\t\"shininess\": 0.4,\r\n\
      \t},\n\
      \t\"chalk\": {\n\
      \t\t\"diffuse\": [0.9, 0.9, 0.9],\n\
      \t\t\"shininess\": 0.05\n\
      \t}\n\
      }";
    let materials = parse_materials(src).unwrap();
    let names = materials.keys().map(String::as_str).collect::<Vec<_>>();

    assert_eq!(names, ["chalk", "silver"]);

    let chalk = materials["chalk"];
    assert_eq!(chalk.ambient, Vector3::new(0.19225, 0.19225, 0.19225));
    assert_eq!(chalk.diffuse, Vector3::new(0.9, 0.9, 0.9));
    assert_eq!(chalk.shininess, 0.05);
    assert_eq!(materials["silver"].shininess, 0.4);
  }

  #[test]
  fn shininess_without_name_is_not_committed() {
    let materials = parse_materials("\"ambient\": [1, 1, 1]\n\"shininess\": 1").unwrap();
    assert!(materials.is_empty());
  }

  #[test]
  fn short_colors_keep_remaining_components() {
    let src = "\"a\": {\n\"ambient\": [0.5, 0.25]\n\"shininess\": 1\n";
    let materials = parse_materials(src).unwrap();

    assert_eq!(materials["a"].ambient, Vector3::new(0.5, 0.25, 0.));
  }

  #[test]
  fn invalid_numbers_are_reported_with_their_line() {
    let src = "\"a\": {\n\"diffuse\": [0.5, oops, 1]\n";

    match parse_materials(src) {
      Err(MaterialError::InvalidNumber { line, value }) => {
        assert_eq!(line, 2);
        assert_eq!(value, "oops");
      }

      r => panic!("unexpected result: {:?}", r),
    }
  }

  #[test]
  fn missing_file() {
    let path = std::env::temp_dir().join("glint-examples-no-such-materials.json");
    assert!(matches!(
      load_materials(&path),
      Err(MaterialError::Io { .. })
    ));
  }

  #[test]
  fn bundled_materials_parse() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/materials.json");
    let materials = load_materials(path).unwrap();

    assert!(materials.len() > 1);
    assert_eq!(materials["gold"], Material::gold());
  }
}
