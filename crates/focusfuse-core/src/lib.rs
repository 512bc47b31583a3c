pub mod consts;
pub mod error;
pub mod focus_depth;
pub mod frame;
pub mod fusion;
pub mod io;
pub mod pipeline;
pub mod pyramid;
pub mod quality;
