//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the peripheral drivers.

pub mod display;
pub mod input;
pub mod sensor;

pub use display::{DisplayError, MatrixDisplay};
pub use input::ButtonInput;
pub use sensor::{MeasurementKind, SensorError, SensorPort};
