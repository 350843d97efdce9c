// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod array_error;
pub mod index_bounds;
pub mod indexed_array_impl;

// Re-export.
pub use array_error::*;
pub use index_bounds::*;
pub use indexed_array_impl::*;
