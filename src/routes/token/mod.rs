pub mod obtain;
pub mod refresh;
