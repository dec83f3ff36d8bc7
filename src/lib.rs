pub mod canvas;
pub mod config;
pub mod events;
pub mod fps;
pub mod geometry;
pub mod io;
pub mod playback;
pub mod render;
pub mod term;
pub mod universe;
