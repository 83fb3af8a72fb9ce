//! Display controller drivers

pub mod ht1632;

pub use ht1632::Ht1632;
