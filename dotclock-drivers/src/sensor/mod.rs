//! Environmental sensor drivers

pub mod sht11;

pub use sht11::Sht11;
