pub mod input;
pub mod mapper;
pub mod motion;
pub mod time;
