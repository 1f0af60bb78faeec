//! Filesystem utilities for gitrig.
//!
//! Owner-only atomic writes for credential material, and directory teardown.

pub mod atomic;

pub use atomic::{remove_dir_all, write_private_file};
