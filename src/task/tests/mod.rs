//! Unit tests for the task module.

mod subtask_tests;
