//! Error management.

use crate::types::VId;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, Err>;

#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "vertex {} is not an integer", _0)]
    NonIntegerVertex(String),
    #[display(fmt = "duplicate vertex {}", _0)]
    DuplicateVertex(VId),
    #[display(fmt = "edge ({}, {}) has an endpoint outside the vertices", _0, _1)]
    DanglingEdge(VId, VId),
    #[display(fmt = "duplicate edge ({}, {})", _0, _1)]
    DuplicateEdge(VId, VId),
    #[display(fmt = "unknown vertex {}", _0)]
    UnknownVertex(VId),
    #[display(fmt = "cannot standardize over {} vertices", _0)]
    DegenerateNormalization(usize),
}

impl std::error::Error for Err {}
