//! # Pumpkin Spice Exporter
//!
//! Exports triangle meshes to the Pumpkin Spice (`.ps`) text format: a flat,
//! line-oriented layout of labeled blocks for vertices, faces, per-face
//! normals, and per-face-corner texture coordinates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ps_export::{ObjLoader, export_to_path, triangulated};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mesh = ObjLoader::load_obj("model.obj")?;
//!     let mesh = triangulated(&mesh)?;
//!     export_to_path(&mesh, "model.ps")?;
//!     Ok(())
//! }
//! ```
//!
//! The serializer itself is a plain function over any [`std::io::Write`];
//! file handling, OBJ loading, and triangulation are separate layers so a
//! host application can substitute its own mesh source.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod error;
pub mod mesh;
pub mod obj_loader;
pub mod serializer;
pub mod triangulate;

pub use config::{Config, ConfigError, ExportConfig};
pub use error::ExportError;
pub use mesh::{Face, Mesh, UvLayer, UvSource};
pub use obj_loader::{ObjError, ObjLoader};
pub use serializer::{export, export_to_path, export_with_active_uvs};
pub use triangulate::triangulated;
