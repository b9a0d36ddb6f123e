//! Method sort classification for JVM class hierarchies.
//!
//! Given a method and the hierarchy of its declaring type, decide whether it is
//! a plain method, a constructor, the type initializer, overridable, a default
//! method, or one of three kinds of compiler-generated bridge method.
//!
//! - [`model`]: the descriptor traits and an in-memory class pool implementing them
//! - [`sort`]: the closed set of sorts and their rules
//! - [`matcher`]: sorts as composable `stillwater` predicates
//! - [`batch`]: classification of a whole pool

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod matcher;
pub mod model;
pub mod sort;
pub mod testkit;

pub use crate::batch::{classify_pool, MethodReport, SortCounts};
pub use crate::errors::{Error, Result};
pub use crate::matcher::{
    is_constructor, is_default_method, is_method, is_overridable, is_return_type_bridge,
    is_type_initializer, is_type_variable_bridge, is_visibility_bridge, MethodSortMatcher,
};
pub use crate::model::{ClassPool, MethodDescription, TypeDescription};
pub use crate::sort::{classify, sorts_of, Sort};
