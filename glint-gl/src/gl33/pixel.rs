use gl::types::*;
use glint::pixel::PixelFormat;

/// OpenGL internal format, format and type of a pixel format.
pub(crate) fn opengl_pixel_format(pf: PixelFormat) -> (GLenum, GLenum, GLenum) {
  match pf {
    PixelFormat::R => (gl::R8, gl::RED, gl::UNSIGNED_BYTE),
    PixelFormat::RG => (gl::RG8, gl::RG, gl::UNSIGNED_BYTE),
    PixelFormat::RGB => (gl::RGB8, gl::RGB, gl::UNSIGNED_BYTE),
    PixelFormat::RGBA => (gl::RGBA8, gl::RGBA, gl::UNSIGNED_BYTE),
    PixelFormat::BGR => (gl::RGB8, gl::BGR, gl::UNSIGNED_BYTE),
    PixelFormat::BGRA => (gl::RGBA8, gl::BGRA, gl::UNSIGNED_BYTE),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bgr_formats_keep_rgb_storage() {
    assert_eq!(opengl_pixel_format(PixelFormat::BGR).0, gl::RGB8);
    assert_eq!(opengl_pixel_format(PixelFormat::BGR).1, gl::BGR);
    assert_eq!(opengl_pixel_format(PixelFormat::BGRA).0, gl::RGBA8);
    assert_eq!(opengl_pixel_format(PixelFormat::BGRA).1, gl::BGRA);
  }

  #[test]
  fn single_channel_is_red() {
    assert_eq!(
      opengl_pixel_format(PixelFormat::R),
      (gl::R8, gl::RED, gl::UNSIGNED_BYTE)
    );
  }
}
