//! # glint windowing
//!
//! This is the base, abstract crate for windowing common types in glint. The `glint` crate
//! abstracts over GPU resources but it doesn’t give you a way to create an OpenGL context, which
//! is tightly related to the windowing system you target. Surface crates, such as `glint-glfw`,
//! solve that problem; they all accept the options defined here.
//!
//! # What’s included
//!
//! - [`WindowDim`]: dimension of a window and its mode (windowed or fullscreen).
//! - [`WindowOpt`]: hints to customize the window integration, such as whether the cursor should
//!   be captured or how many samples multisampling should use.

#![deny(missing_docs)]

/// Dimension metrics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowDim {
  /// Windowed mode.
  Windowed {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
  /// Fullscreen mode, using the resolution of the primary monitor.
  Fullscreen,
}

/// Cursor mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorMode {
  /// The cursor is always visible.
  Visible,
  /// The cursor exists yet is hidden when over the window.
  Invisible,
  /// The cursor is hidden and captured by the window; its movements are unbounded.
  Disabled,
}

/// Different window options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to
/// start with `default()` though.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowOpt {
  dim: WindowDim,
  cursor_mode: CursorMode,
  num_samples: Option<u32>,
}

impl Default for WindowOpt {
  /// Defaults:
  ///
  /// - `dim` set to an 800×600 window.
  /// - `cursor_mode` set to [`CursorMode::Visible`].
  /// - `num_samples` set to `None`.
  fn default() -> Self {
    WindowOpt {
      dim: WindowDim::Windowed {
        width: 800,
        height: 600,
      },
      cursor_mode: CursorMode::Visible,
      num_samples: None,
    }
  }
}

impl WindowOpt {
  /// Set the dimension of the window.
  #[inline]
  pub fn set_dim(self, dim: WindowDim) -> Self {
    WindowOpt { dim, ..self }
  }

  /// Get the dimension of the window.
  #[inline]
  pub fn dim(&self) -> &WindowDim {
    &self.dim
  }

  /// Hide, unhide or disable the cursor. Default to [`CursorMode::Visible`].
  #[inline]
  pub fn set_cursor_mode(self, mode: CursorMode) -> Self {
    WindowOpt {
      cursor_mode: mode,
      ..self
    }
  }

  /// Get the cursor mode.
  #[inline]
  pub fn cursor_mode(&self) -> CursorMode {
    self.cursor_mode
  }

  /// Set the number of samples to use for multisampling.
  ///
  /// Pass `None` to disable multisampling.
  #[inline]
  pub fn set_num_samples<S>(self, samples: S) -> Self
  where
    S: Into<Option<u32>>,
  {
    WindowOpt {
      num_samples: samples.into(),
      ..self
    }
  }

  /// Get the number of samples to use in multisampling, if any.
  #[inline]
  pub fn num_samples(&self) -> Option<u32> {
    self.num_samples
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_keeps_other_options() {
    let opt = WindowOpt::default()
      .set_cursor_mode(CursorMode::Disabled)
      .set_num_samples(4)
      .set_dim(WindowDim::Fullscreen);

    assert_eq!(opt.dim(), &WindowDim::Fullscreen);
    assert_eq!(opt.cursor_mode(), CursorMode::Disabled);
    assert_eq!(opt.num_samples(), Some(4));

    let opt = opt.set_num_samples(None);
    assert_eq!(opt.num_samples(), None);
    assert_eq!(opt.cursor_mode(), CursorMode::Disabled);
  }
}
