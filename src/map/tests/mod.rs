//! Tests for the marker map module

mod surface_tests;
