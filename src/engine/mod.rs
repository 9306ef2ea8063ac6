pub mod bench;
pub mod food;
pub mod game;
pub mod snake;
pub mod topology;
