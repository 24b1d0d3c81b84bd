//! 2D textures and decoded images.
//!
//! Textures are created out of an [`Image`], which is a tightly packed buffer of 8-bit texels
//! along with its dimensions and channel count. Images are usually decoded from files with
//! [`Image::open`], which can flip them vertically on load: OpenGL expects the first row of
//! texels to be the bottom one while most image formats store the top one first.
//!
//! When uploading, the [`PixelFormat`] of the texture is picked from the channel count of the
//! image (see [`select_format`]); the format given by the caller is only a fallback for channel
//! counts that have no obvious mapping. Mipmaps are always generated after the upload.
//!
//! A texture starts with the default [`Sampler`]: repeat wrapping and linear filtering. Sampler
//! parameters can be changed afterwards with [`Texture::set_parameter`].
//!
//! [`select_format`]: crate::pixel::select_format

use crate::backend::texture::Texture as TextureBackend;
use crate::context::GraphicsContext;
use crate::pixel::{select_format, PixelFormat};
use image::{GenericImageView as _, ImageError};
use std::error;
use std::fmt;
use std::path::{Path, PathBuf};

/// How to wrap texture coordinates while sampling textures?
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Wrap {
  /// If textures coordinates lay outside of *[0;1]*, they will be clamped to either *0* or *1* for
  /// every components.
  ClampToEdge,
  /// Textures coordinates are repeated if they lay outside of *[0;1]*.
  Repeat,
  /// Same as `Repeat` but it will alternatively repeat between *[0;1]* and *[1;0]*.
  MirroredRepeat,
}

/// Minification filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MinFilter {
  /// Nearest interpolation.
  Nearest,
  /// Linear interpolation between surrounding pixels.
  Linear,
  /// This filter will select the nearest mipmap between two samples and will perform a nearest
  /// interpolation afterwards.
  NearestMipmapNearest,
  /// This filter will select the nearest mipmap between two samples and will perform a linear
  /// interpolation afterwards.
  NearestMipmapLinear,
  /// This filter will linearly interpolate between two mipmaps, which selected texels would have
  /// been interpolated with a nearest filter.
  LinearMipmapNearest,
  /// This filter will linearly interpolate between two mipmaps, which selected texels would have
  /// been linearly interpolated as well.
  LinearMipmapLinear,
}

/// Magnification filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MagFilter {
  /// Nearest interpolation.
  Nearest,
  /// Linear interpolation between surrounding pixels.
  Linear,
}

/// Sampler applied to a texture when it is created.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Sampler {
  /// How should we wrap around the *s* sampling coordinate?
  pub wrap_s: Wrap,
  /// How should we wrap around the *t* sampling coordinate?
  pub wrap_t: Wrap,
  /// Minification filter.
  pub min_filter: MinFilter,
  /// Magnification filter.
  pub mag_filter: MagFilter,
}

impl Default for Sampler {
  /// Defaults:
  ///
  /// - `wrap_s` and `wrap_t` set to [`Wrap::Repeat`].
  /// - `min_filter` and `mag_filter` set to linear filtering.
  fn default() -> Self {
    Sampler {
      wrap_s: Wrap::Repeat,
      wrap_t: Wrap::Repeat,
      min_filter: MinFilter::Linear,
      mag_filter: MagFilter::Linear,
    }
  }
}

/// A single sampler parameter, as changed by [`Texture::set_parameter`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parameter {
  /// Wrapping of the *s* coordinate.
  WrapS(Wrap),
  /// Wrapping of the *t* coordinate.
  WrapT(Wrap),
  /// Minification filter.
  MinFilter(MinFilter),
  /// Magnification filter.
  MagFilter(MagFilter),
}

/// Whether an image must be flipped when decoded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Flip {
  /// Keep rows in file order.
  None,
  /// Reverse the order of rows, so that the last row of the file comes first.
  Vertically,
}

/// Errors that might happen when working with textures.
#[non_exhaustive]
#[derive(Debug)]
pub enum TextureError {
  /// An image file could not be opened or decoded.
  Decode {
    /// Path of the file.
    path: PathBuf,
    /// Underlying decoding error.
    source: ImageError,
  },
  /// Not enough texels were provided for the dimensions of an image.
  InvalidTexelCount {
    /// Number of expected bytes.
    expected: usize,
    /// Number of provided bytes.
    actual: usize,
  },
  /// The driver could not give a new texture handle.
  CannotCreate,
}

impl fmt::Display for TextureError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TextureError::Decode { ref path, ref source } => {
        write!(f, "cannot decode image {}: {}", path.display(), source)
      }

      TextureError::InvalidTexelCount { expected, actual } => write!(
        f,
        "invalid texel count (expected {} bytes, got {})",
        expected, actual
      ),

      TextureError::CannotCreate => f.write_str("cannot create texture"),
    }
  }
}

impl error::Error for TextureError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      TextureError::Decode { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// A decoded image.
///
/// Texels are tightly packed, 8 bits per channel, row after row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
  width: u32,
  height: u32,
  channels: u8,
  texels: Vec<u8>,
}

impl Image {
  /// Decode an image file.
  ///
  /// The channel count of the file is preserved for 8-bit gray, gray-alpha, RGB and RGBA images;
  /// anything else is converted to RGBA.
  pub fn open(path: impl AsRef<Path>, flip: Flip) -> Result<Self, TextureError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| TextureError::Decode {
      path: path.to_owned(),
      source,
    })?;

    let img = match flip {
      Flip::None => img,
      Flip::Vertically => img.flipv(),
    };

    let (width, height) = (img.width(), img.height());
    let (channels, texels) = match img.color().channel_count() {
      1 => (1, img.to_luma8().into_raw()),
      2 => (2, img.to_luma_alpha8().into_raw()),
      3 => (3, img.to_rgb8().into_raw()),
      _ => (4, img.to_rgba8().into_raw()),
    };

    log::debug!(
      "decoded {} ({}×{}, {} channels)",
      path.display(),
      width,
      height,
      channels
    );

    Ok(Image {
      width,
      height,
      channels,
      texels,
    })
  }

  /// Build an image out of raw texels.
  ///
  /// `texels` must hold exactly `width * height * channels` bytes.
  pub fn from_raw(
    width: u32,
    height: u32,
    channels: u8,
    texels: Vec<u8>,
  ) -> Result<Self, TextureError> {
    let expected = width as usize * height as usize * channels as usize;

    if texels.len() != expected {
      return Err(TextureError::InvalidTexelCount {
        expected,
        actual: texels.len(),
      });
    }

    Ok(Image {
      width,
      height,
      channels,
      texels,
    })
  }

  /// Width of the image, in pixels.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Height of the image, in pixels.
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Number of channels per pixel.
  pub fn channels(&self) -> u8 {
    self.channels
  }

  /// Raw texels.
  pub fn texels(&self) -> &[u8] {
    &self.texels
  }
}

/// A 2D texture.
///
/// `B` is the backend type. It must implement [`backend::texture::Texture`].
///
/// [`backend::texture::Texture`]: crate::backend::texture::Texture
#[derive(Debug)]
pub struct Texture<B>
where
  B: ?Sized + TextureBackend,
{
  repr: B::TextureRepr,
  width: u32,
  height: u32,
  channels: u8,
  format: PixelFormat,
}

impl<B> Drop for Texture<B>
where
  B: ?Sized + TextureBackend,
{
  fn drop(&mut self) {
    unsafe { B::destroy_texture(&mut self.repr) };
  }
}

impl<B> Texture<B>
where
  B: ?Sized + TextureBackend,
{
  /// Create a texture and upload `image` into it.
  ///
  /// The pixel format is picked from the channel count of the image, `format_hint` being used for
  /// channel counts other than 1, 3 and 4.
  pub fn from_image<C>(
    ctx: &mut C,
    image: &Image,
    format_hint: PixelFormat,
  ) -> Result<Self, TextureError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let format = select_format(image.channels, format_hint);
    let expected = image.width as usize * image.height as usize * format.channels_len();

    if image.texels.len() < expected {
      return Err(TextureError::InvalidTexelCount {
        expected,
        actual: image.texels.len(),
      });
    }

    let repr = unsafe { ctx.backend().new_texture(&Sampler::default())? };

    // from now on, a failed upload releases the texture when dropped
    let mut texture = Texture {
      repr,
      width: image.width,
      height: image.height,
      channels: image.channels,
      format,
    };

    unsafe {
      B::upload_texels(
        &mut texture.repr,
        image.width,
        image.height,
        format,
        &image.texels,
      )?;
    }

    Ok(texture)
  }

  /// Decode an image file and upload it into a new texture.
  ///
  /// Decoding errors are logged at the error level and returned.
  ///
  /// # Notes
  ///
  /// You might be interested in the [`GraphicsContext::load_texture`] function instead, which is
  /// the exact same function, but benefits from more type inference.
  pub fn load<C>(
    ctx: &mut C,
    path: impl AsRef<Path>,
    format_hint: PixelFormat,
    flip: Flip,
  ) -> Result<Self, TextureError>
  where
    C: GraphicsContext<Backend = B>,
  {
    Image::open(path, flip)
      .and_then(|image| Self::from_image(ctx, &image, format_hint))
      .map_err(|e| {
        log::error!("{}", e);
        e
      })
  }

  /// Activate the texture unit `unit` and bind the texture to it.
  pub fn bind(&self, unit: u32) {
    unsafe { B::bind_texture(&self.repr, unit) }
  }

  /// Clear the 2D texture binding of the texture unit 0.
  ///
  /// Only the default unit is cleared, whatever unit the texture was bound to.
  pub fn unbind(&self) {
    unsafe { B::unbind_texture(&self.repr) }
  }

  /// Change a sampler parameter.
  ///
  /// The texture gets bound on the currently active texture unit, and that unit is left as is. It
  /// is not necessarily unit 0: after `bind(3)`, unit 3 is the one receiving the texture. Call
  /// `bind(0)` first to change parameters through the default unit.
  pub fn set_parameter(&mut self, param: Parameter) {
    unsafe { B::set_texture_parameter(&mut self.repr, param) }
  }

  /// Handle of the texture.
  pub fn handle(&self) -> u32 {
    unsafe { B::texture_handle(&self.repr) }
  }

  /// Width of the texture, in pixels.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Height of the texture, in pixels.
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Number of channels of the image the texture was created from.
  pub fn channels(&self) -> u8 {
    self.channels
  }

  /// Pixel format the texture was uploaded with.
  pub fn format(&self) -> PixelFormat {
    self.format
  }
}
