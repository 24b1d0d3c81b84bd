//! Texture backend interface.
//!
//! This interface defines the low-level API 2D textures must implement to be usable.

use crate::pixel::PixelFormat;
use crate::texture::{Parameter, Sampler, TextureError};

/// Texture backend.
pub unsafe trait Texture {
  /// Backend representation of the texture.
  type TextureRepr;

  /// Allocate a new, empty texture and apply the `sampler` to it.
  unsafe fn new_texture(&mut self, sampler: &Sampler) -> Result<Self::TextureRepr, TextureError>;

  /// Release the texture.
  unsafe fn destroy_texture(texture: &mut Self::TextureRepr);

  /// Upload the base level of the texture and generate its mipmaps.
  ///
  /// `texels` is tightly packed and holds at least `width * height` pixels in `format`.
  unsafe fn upload_texels(
    texture: &mut Self::TextureRepr,
    width: u32,
    height: u32,
    format: PixelFormat,
    texels: &[u8],
  ) -> Result<(), TextureError>;

  /// Activate the texture unit `unit` and bind the texture to it.
  unsafe fn bind_texture(texture: &Self::TextureRepr, unit: u32);

  /// Clear the 2D texture binding of the default texture unit.
  unsafe fn unbind_texture(texture: &Self::TextureRepr);

  /// Change a sampler parameter.
  ///
  /// The texture gets bound on the currently active unit.
  unsafe fn set_texture_parameter(texture: &mut Self::TextureRepr, param: Parameter);

  /// Handle of the texture.
  unsafe fn texture_handle(texture: &Self::TextureRepr) -> u32;
}
