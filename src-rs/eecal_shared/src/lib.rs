#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Shared utilities for eecal

pub mod error;
pub mod span;
