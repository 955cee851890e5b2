pub mod component;
pub mod entity;
pub mod storage;
pub mod world;

pub use component::{Component, Hashable};
pub use entity::Entity;
pub use storage::Store;
pub use world::{Id as WorldId, SpawnManyError, World};
