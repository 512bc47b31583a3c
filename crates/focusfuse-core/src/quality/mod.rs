pub mod scoring;
pub mod spectral;
pub mod window;

pub use scoring::{score_frames, score_frames_with_progress};
pub use spectral::spectral_score;
pub use window::{select_window, FocusWindow, WindowPlacement};
