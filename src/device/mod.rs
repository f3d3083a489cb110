mod device_trait;
mod golden;
pub mod wire;

pub use device_trait::Device;
pub use golden::GoldenWire;
pub use wire::{WireAdapter, WireDevice};

/// The golden model wired up behind the packed bus, ready for the runner.
pub fn golden_device() -> WireAdapter<GoldenWire> {
    WireAdapter::new(GoldenWire::new())
}
