use crate::gl33::{pixel::opengl_pixel_format, state::GLState, GL33};
use gl::types::*;
use glint::backend::texture::Texture as TextureBackend;
use glint::pixel::PixelFormat;
use glint::texture::{MagFilter, MinFilter, Parameter, Sampler, TextureError, Wrap};
use std::{cell::RefCell, os::raw::c_void, rc::Rc};

/// OpenGL 2D texture.
#[derive(Debug)]
pub struct Texture {
  pub(crate) handle: GLuint, // handle to the GPU texture object
  state: Rc<RefCell<GLState>>,
}

unsafe impl TextureBackend for GL33 {
  type TextureRepr = Texture;

  unsafe fn new_texture(&mut self, sampler: &Sampler) -> Result<Self::TextureRepr, TextureError> {
    let mut handle: GLuint = 0;
    gl::GenTextures(1, &mut handle);

    if handle == 0 {
      return Err(TextureError::CannotCreate);
    }

    self.state.borrow_mut().bind_texture(handle);
    apply_sampler_to_texture(sampler);

    Ok(Texture {
      handle,
      state: self.state.clone(),
    })
  }

  unsafe fn destroy_texture(texture: &mut Self::TextureRepr) {
    texture.state.borrow_mut().forget_texture(texture.handle);
    gl::DeleteTextures(1, &texture.handle);
  }

  unsafe fn upload_texels(
    texture: &mut Self::TextureRepr,
    width: u32,
    height: u32,
    format: PixelFormat,
    texels: &[u8],
  ) -> Result<(), TextureError> {
    let expected = width as usize * height as usize * format.channels_len();

    if texels.len() < expected {
      // potential segfault / overflow; abort
      return Err(TextureError::InvalidTexelCount {
        expected,
        actual: texels.len(),
      });
    }

    texture.state.borrow_mut().bind_texture(texture.handle);

    // rows are tightly packed: the alignment must match the length of a row
    let skip_bytes = (width as usize * format.channels_len()) % 8;
    set_unpack_alignment(skip_bytes);

    let (internal_format, format, encoding) = opengl_pixel_format(format);
    gl::TexImage2D(
      gl::TEXTURE_2D,
      0,
      internal_format as GLint,
      width as GLsizei,
      height as GLsizei,
      0,
      format,
      encoding,
      texels.as_ptr() as *const c_void,
    );
    gl::GenerateMipmap(gl::TEXTURE_2D);

    Ok(())
  }

  unsafe fn bind_texture(texture: &Self::TextureRepr, unit: u32) {
    let mut state = texture.state.borrow_mut();
    state.set_texture_unit(unit);
    state.bind_texture(texture.handle);
  }

  unsafe fn unbind_texture(texture: &Self::TextureRepr) {
    let mut state = texture.state.borrow_mut();
    state.set_texture_unit(0);
    state.bind_texture(0);
  }

  unsafe fn set_texture_parameter(texture: &mut Self::TextureRepr, param: Parameter) {
    texture.state.borrow_mut().bind_texture(texture.handle);

    let (name, value) = match param {
      Parameter::WrapS(wrap) => (gl::TEXTURE_WRAP_S, opengl_wrap(wrap)),
      Parameter::WrapT(wrap) => (gl::TEXTURE_WRAP_T, opengl_wrap(wrap)),
      Parameter::MinFilter(filter) => (gl::TEXTURE_MIN_FILTER, opengl_min_filter(filter)),
      Parameter::MagFilter(filter) => (gl::TEXTURE_MAG_FILTER, opengl_mag_filter(filter)),
    };

    gl::TexParameteri(gl::TEXTURE_2D, name, value as GLint);
  }

  unsafe fn texture_handle(texture: &Self::TextureRepr) -> u32 {
    texture.handle
  }
}

fn apply_sampler_to_texture(sampler: &Sampler) {
  unsafe {
    gl::TexParameteri(
      gl::TEXTURE_2D,
      gl::TEXTURE_WRAP_S,
      opengl_wrap(sampler.wrap_s) as GLint,
    );
    gl::TexParameteri(
      gl::TEXTURE_2D,
      gl::TEXTURE_WRAP_T,
      opengl_wrap(sampler.wrap_t) as GLint,
    );
    gl::TexParameteri(
      gl::TEXTURE_2D,
      gl::TEXTURE_MIN_FILTER,
      opengl_min_filter(sampler.min_filter) as GLint,
    );
    gl::TexParameteri(
      gl::TEXTURE_2D,
      gl::TEXTURE_MAG_FILTER,
      opengl_mag_filter(sampler.mag_filter) as GLint,
    );
  }
}

fn opengl_wrap(wrap: Wrap) -> GLenum {
  match wrap {
    Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
    Wrap::Repeat => gl::REPEAT,
    Wrap::MirroredRepeat => gl::MIRRORED_REPEAT,
  }
}

fn opengl_min_filter(filter: MinFilter) -> GLenum {
  match filter {
    MinFilter::Nearest => gl::NEAREST,
    MinFilter::Linear => gl::LINEAR,
    MinFilter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
    MinFilter::NearestMipmapLinear => gl::NEAREST_MIPMAP_LINEAR,
    MinFilter::LinearMipmapNearest => gl::LINEAR_MIPMAP_NEAREST,
    MinFilter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
  }
}

fn opengl_mag_filter(filter: MagFilter) -> GLenum {
  match filter {
    MagFilter::Nearest => gl::NEAREST,
    MagFilter::Linear => gl::LINEAR,
  }
}

// set the unpack alignment for uploading aligned texels
fn set_unpack_alignment(skip_bytes: usize) {
  let unpack_alignment = match skip_bytes {
    0 => 8,
    2 => 2,
    4 => 4,
    _ => 1,
  };

  unsafe { gl::PixelStorei(gl::UNPACK_ALIGNMENT, unpack_alignment) };
}
