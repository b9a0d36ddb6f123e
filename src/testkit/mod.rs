//! Testing infrastructure for methodsort.
//!
//! - **[`fixtures`]**: class hierarchies exercising each bridge rule
//! - **Assertion macros**: `assert_result_ok!`, `assert_contains_error!` and
//!   `assert_sorts!`, exported at the crate root
//!
//! # Quick Start
//!
//! ```rust
//! use methodsort::assert_sorts;
//! use methodsort::sort::Sort;
//! use methodsort::testkit::fixtures;
//!
//! let pool = fixtures::covariant_return();
//! assert_sorts!(
//!     pool,
//!     "com.example.Sub",
//!     "java.lang.Object get()",
//!     [Sort::Method, Sort::Overridable, Sort::ReturnTypeBridge]
//! );
//! ```

pub mod assertions;
pub mod fixtures;
