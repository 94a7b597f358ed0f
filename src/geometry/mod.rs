pub mod obstacle;

pub use obstacle::Obstacle;
