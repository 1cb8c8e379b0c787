//! Unit tests for the category module.
