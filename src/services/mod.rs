//! Location services
//!
//! Name resolution and world-grid geometry built on the domain models.

pub mod astrometrics;
pub mod catalog;
