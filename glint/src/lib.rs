//! # Thin, ownership-safe GPU resources
//!
//! glint wraps the handful of GPU objects a small OpenGL program juggles with (vertex and element
//! buffers, shader programs, 2D textures and vertex arrays) into Rust values that own their
//! driver-side handle. A handle is released exactly once, when its owner is dropped. Moving a
//! value moves the handle with it; nothing can be cloned, so two values never claim the same
//! handle.
//!
//! # Backends
//!
//! The crate itself never talks to a driver. Every operation goes through the traits found in
//! [`backend`], which a _backend type_ implements. The OpenGL 3.3 backend lives in the `glint-gl`
//! crate. Having the driver behind traits also means you can plug a recording backend in and test
//! the lifetime rules of this crate without any GPU around.
//!
//! A backend is reached through a [`GraphicsContext`], which is typically provided by a windowing
//! crate such as `glint-glfw`.
//!
//! # Binding state
//!
//! OpenGL is a big global state machine: binding a buffer, using a program or activating a texture
//! unit are side effects on the context, not on the object. Operations that depend on a binding
//! state it in their documentation, and operations that need one (setting a uniform, drawing a
//! vertex array) perform the binding themselves first. Backends are expected to cache bindings so
//! that redundant bind calls are free.
//!
//! # What’s included?
//!
//! - [`buffer`]: [`VertexBuffer`] and [`ElementBuffer`].
//! - [`shader`]: [`Program`], with a lazily populated uniform-location cache.
//! - [`texture`] and [`pixel`]: decoded [`Image`]s and 2D [`Texture`]s.
//! - [`vertex_array`]: [`VertexArray`] to describe vertex layouts and issue draw calls.
//! - [`render`]: viewport, clearing and depth test.
//! - [`camera`]: a first-person [`Camera`] computing view and projection matrices.
//!
//! [`GraphicsContext`]: crate::context::GraphicsContext
//! [`VertexBuffer`]: crate::buffer::VertexBuffer
//! [`ElementBuffer`]: crate::buffer::ElementBuffer
//! [`Program`]: crate::shader::Program
//! [`Image`]: crate::texture::Image
//! [`Texture`]: crate::texture::Texture
//! [`VertexArray`]: crate::vertex_array::VertexArray
//! [`Camera`]: crate::camera::Camera

#![deny(missing_docs)]

pub mod backend;
pub mod buffer;
pub mod camera;
pub mod context;
pub mod pixel;
pub mod render;
pub mod shader;
pub mod texture;
pub mod vertex_array;
