//! Control cages for testing and demonstration: a parser for the line-based shape format used by
//! the regression fixtures, and a few procedural cages.
//!
//! # Format
//!
//! ```text
//! # comment
//! v 0.0 1.0 0.0        # position
//! vt 0.5 0.5           # texture coordinate
//! vn 0.0 1.0 0.0       # normal
//! f 1/1/1 2/2/2 3/3/3  # face; 1-based, negative indices count back from the last position
//! t interpolateboundary 1/0/0 1
//! ```
//!
//! A `t` line names a tag, then the number of integer, float and string arguments that follow.

mod error;
mod parse;
mod procedural;

pub use error::*;
pub use procedural::*;

use std::str::FromStr;

use nalgebra::{Point2, Point3, Vector3};

use crate::{Points, Topology, TopologyError};

/// A named parameter attached to a [Shape].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub name: String,
    pub ints: Vec<i32>,
    pub floats: Vec<f32>,
    pub strings: Vec<String>,
}

/// A polygonal control cage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub positions: Vec<Point3<f32>>,
    pub uvs: Vec<Point2<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub face_sizes: Vec<u32>,
    /// 0-based position indices of every face, concatenated.
    pub face_indices: Vec<u32>,
    pub tags: Vec<Tag>,
}

impl Shape {
    pub fn parse(src: &str) -> Result<Self, ShapeError> {
        parse::parse(src)
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.face_sizes.len()
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn topology(&self) -> Result<Topology<u32>, TopologyError> {
        Topology::new(
            self.face_sizes.clone(),
            self.face_indices.clone(),
            self.positions.len(),
        )
    }

    /// Positions as xyz [Points].
    pub fn points(&self) -> Points {
        Points::from_positions(self.positions.iter().copied())
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
