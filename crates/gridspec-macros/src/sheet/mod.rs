//! Implementation of the `#[derive(Sheet)]` macro.
//!
//! This module turns struct annotations into grid sheet metadata:
//! `#[sheet(...)]` on the struct becomes the `SheetAnnotation`, and every
//! `#[column(...)]` field becomes a participating `FieldMetadata`.

mod attrs;
mod derive;
mod kind;

pub use derive::sheet_derive_impl;
