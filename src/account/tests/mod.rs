//! Unit tests for the account module.

mod domain_tests;
