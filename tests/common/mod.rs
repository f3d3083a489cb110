#![allow(dead_code, unused_imports)]

pub mod faulty_devices;
pub mod ring_logger;

pub use faulty_devices::{InvertedBorrow, StuckBit};
pub use ring_logger::{init_logger, log_contains};
