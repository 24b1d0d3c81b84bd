//! Backend interfacing.
//!
//! Almost everything declared in this module and its submodules is `unsafe`. An end-user is not
//! supposed to implement any of this. Library authors might use some traits from here, required
//! by generic code, but no one but backend authors should implement any symbols from here.
//!
//! # Conventions
//!
//! Each trait exposes the representation of its objects as an associated type (`*Repr`).
//! Functions creating objects take the backend by `&mut self`; functions acting on an existing
//! object are associated functions taking the representation only. A representation must then
//! carry whatever it needs to reach the driver state.
//!
//! Destruction is always explicit: front types call the `destroy_*` functions from their `Drop`
//! implementation, exactly once. Representations must not release anything on their own.

pub mod buffer;
pub mod render;
pub mod shader;
pub mod texture;
pub mod vertex_array;
