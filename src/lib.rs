//! Infinite cyclic photo carousel rendered through a fixed set of slots.

pub mod carousel;
pub mod config;
pub mod console;
pub mod error;
pub mod events;
pub mod mode;
pub mod scan;
pub mod sequence;

pub use carousel::{Carousel, SlotBinding};
pub use error::Error;
pub use mode::CarouselMode;
pub use sequence::CyclicIndexSequence;
