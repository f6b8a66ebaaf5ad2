//! Session layer: the presentation seam and the round driver.

pub mod driver;
pub mod surface;

pub use driver::QuizSession;
pub use surface::PresentationSurface;
