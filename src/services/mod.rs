pub mod spawner;

pub use spawner::{Edge, Spawner};
