//! Window functions and impulse-response shaping

pub mod windows;
pub mod minimum_phase;
pub mod normalize;

pub use windows::{WindowType, generate_window};
pub use minimum_phase::{MinimumPhaseReconstructor, hilbert_mask};
pub use normalize::normalize;
