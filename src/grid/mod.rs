pub mod board;
pub mod codec;
pub mod types;
