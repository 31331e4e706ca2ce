//! Integration tests for storyrake
//!
//! These tests use wiremock to stand in for the forum and exercise the
//! scrape cycle end-to-end in both modes.

mod scrape_tests;
