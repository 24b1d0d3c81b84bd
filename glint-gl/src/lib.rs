//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for glint. The only one
//! so far is [`GL33`], targeting OpenGL 3.3 core profile contexts.

pub mod gl33;

pub use gl33::GL33;
