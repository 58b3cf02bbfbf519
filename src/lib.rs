#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod host;
pub mod normals;
mod points;
pub mod refine;
pub mod registry;
pub mod shape;
pub mod topology;

pub use error::Error;
pub use points::*;
pub use registry::{HandleId, MeshHandle, Registry, SharedRegistry};
pub use topology::{Topology, TopologyError};

pub use smoothmesh_common::MeshIndex;
