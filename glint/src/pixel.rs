//! Pixel formats.
//!
//! Textures in this crate are always made of 8-bit normalized channels; a [`PixelFormat`] only
//! tells how many channels there are and in which order they are laid out.

/// Layout of the channels of a pixel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelFormat {
  /// Single channel.
  R,
  /// Red and green channels.
  RG,
  /// Red, green and blue channels.
  RGB,
  /// Red, green, blue and alpha channels.
  RGBA,
  /// Blue, green and red channels.
  BGR,
  /// Blue, green, red and alpha channels.
  BGRA,
}

impl PixelFormat {
  /// Number of channels.
  pub fn channels_len(self) -> usize {
    match self {
      PixelFormat::R => 1,
      PixelFormat::RG => 2,
      PixelFormat::RGB | PixelFormat::BGR => 3,
      PixelFormat::RGBA | PixelFormat::BGRA => 4,
    }
  }
}

/// Pick the pixel format of an image from its channel count.
///
/// Images with 1, 3 or 4 channels are respectively uploaded as [`PixelFormat::R`],
/// [`PixelFormat::RGB`] and [`PixelFormat::RGBA`], whatever `hint` says. Any other channel count
/// falls back to `hint` verbatim.
pub fn select_format(channels: u8, hint: PixelFormat) -> PixelFormat {
  match channels {
    1 => PixelFormat::R,
    3 => PixelFormat::RGB,
    4 => PixelFormat::RGBA,
    _ => hint,
  }
}
