pub mod game;
pub mod helpers;
pub mod model;
