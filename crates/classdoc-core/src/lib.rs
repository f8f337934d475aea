//! classdoc Core Types
//!
//! This crate provides the documentation model shared by the classdoc parser
//! and renderer. It includes:
//!
//! - **Members**: Fields and methods owned by a class ([`member::Member`])
//! - **Classes**: Named class records with an optional superclass name ([`class::Class`])
//! - **Document**: The name-indexed class registry and ancestor walk ([`document::Document`])

pub mod class;
pub mod document;
pub mod member;
