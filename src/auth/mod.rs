pub mod gate;
pub mod identity;
