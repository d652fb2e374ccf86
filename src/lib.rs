//! # SOLID Principles in Rust
//!
//! One module per principle, each a small self-contained example:
//!
//! ## Pattern 1: Single Responsibility
//! - Authentication and user management as separate services
//!
//! ## Pattern 2: Open/Closed
//! - A `Shape` trait; new shapes never edit existing code
//!
//! ## Pattern 3: Liskov Substitution
//! - Flight as an optional capability instead of a method penguins must refuse
//!
//! ## Pattern 4: Interface Segregation
//! - `Workable` and `Eatable` split so robots never stub out `eat`
//!
//! ## Pattern 5: Dependency Inversion
//! - A light switch that only knows the `Switchable` trait
//!
//! Run the walkthrough with: `cargo run --bin solid-demo`

pub mod config;
pub mod demo;
pub mod error;
pub mod p1_single_responsibility;
pub mod p2_open_closed;
pub mod p3_liskov_substitution;
pub mod p4_interface_segregation;
pub mod p5_dependency_inversion;

pub use config::DemoConfig;
pub use error::{Result, SolidError};
