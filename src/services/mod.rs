// Service module exports
// The slot engine (resolver, grid, calendar, palette) plus data and settings I/O

pub mod calendar;
pub mod directory;
pub mod grid;
pub mod palette;
pub mod resolver;
pub mod settings;
