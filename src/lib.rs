//! The library code for the `stela` static site generator. The
//! architecture can be generally broken down into two distinct steps:
//!
//! 1. Parsing article records from the CSV index ([`crate::index`])
//! 2. Converting the records into output files on disk ([`crate::write`])
//!
//! The second step is the more involved. It is itself composed of two
//! independent sub-steps that both consume the same read-only record
//! sequence:
//!
//! 1. Building the homepage, whose table of contents links every article
//!    page in index order
//! 2. Building one page per article from its markdown source
//!
//! Neither sub-step depends on the other; they run sequentially for
//! simplicity. Documents are assembled with the owned-tree builder in
//! [`crate::html`] and serialized exactly once, and [`crate::build`]
//! stitches the whole pipeline together behind a single entry point.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod html;
pub mod index;
pub mod write;
