//! Property-based tests for the flag namespace and the output renderer

mod rendering;
