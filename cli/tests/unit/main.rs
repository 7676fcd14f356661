//! Unit tests for podman-cli-wrapper
//!
//! These tests use mocked command runners and run fast without a container
//! engine installed.

mod image_command;
mod property_tests;
