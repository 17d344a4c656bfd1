//! Rendering acceptance tests.
//!
//! Each test queues keys on a [`PromptHarness`](crate::test_harness::PromptHarness),
//! runs a real prompt against them, and checks what the terminal shows.
