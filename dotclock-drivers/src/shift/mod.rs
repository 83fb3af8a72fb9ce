//! Serial shifter implementations

pub mod bitbang;

pub use bitbang::BitBangShifter;
