//! Render state.
//!
//! The render state is global to a graphics context; it is changed through
//! [`GraphicsContext::set_viewport`], [`GraphicsContext::clear`] and
//! [`GraphicsContext::set_depth_test`].
//!
//! [`GraphicsContext::set_viewport`]: crate::context::GraphicsContext::set_viewport
//! [`GraphicsContext::clear`]: crate::context::GraphicsContext::clear
//! [`GraphicsContext::set_depth_test`]: crate::context::GraphicsContext::set_depth_test

/// Whether or not depth test should be enabled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DepthTest {
  /// The depth test is enabled.
  On,
  /// The depth test is disabled.
  Off,
}
