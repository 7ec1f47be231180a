pub mod collection;
pub mod movement;

pub use collection::MovementCollection;
pub use movement::Movement;
