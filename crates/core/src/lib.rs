//! Core business logic for ViewMint.
//!
//! This crate contains pure calculation code with ZERO web or database
//! dependencies. All domain types, validation rules, and the earnings
//! math live here.
//!
//! # Modules
//!
//! - `currency` - Currency catalog, conversion, and display formatting
//! - `earnings` - RPM-based earnings estimation
//! - `niche` - Trending content niche catalog
//! - `import` - Mock YouTube video/channel import
//! - `validation` - Boundary validation for calculation payloads

pub mod currency;
pub mod earnings;
pub mod import;
pub mod niche;
pub mod validation;
