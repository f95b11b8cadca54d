//! Test suite for the Trip Wizards chat backend
//!
//! This module organizes all integration and property tests

pub mod common;
pub mod integration;
pub mod property;
