pub mod can;
pub mod led;
pub mod pins;
pub mod ports;

pub use led::Led;
pub use pins::PinId;
pub use pins::Pins;
