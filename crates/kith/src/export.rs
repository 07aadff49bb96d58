//! Export of computed layouts to output formats.

pub mod svg;
