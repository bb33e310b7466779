//! Bioclimatic comfort indexes for psychroflow.
//!
//! Indexes are empirical closed-form expressions over dry-bulb temperature,
//! relative humidity and (for some) radiation and wind. They consume the same
//! quantities the psychrometric engine works with and share its conventions:
//! temperatures in °C, relative humidity as a fraction in [0, 1].
//!
//! # Indexes
//!
//! - **ITU** (temperature-humidity index, also THI): heat stress from air
//!   temperature and humidity alone
//! - **HLI** (heat load index): cattle heat load including solar radiation and
//!   wind speed
//!
//! Unlike the engine, every index validates its inputs and reports violations
//! as [`IndexError`]s.

pub mod error;
pub mod hli;
pub mod index;
pub mod itu;

pub use error::{IndexError, IndexResult};
pub use hli::{Hli, HliInput, hli};
pub use index::ComfortIndex;
pub use itu::{Itu, ItuInput, itu};
