pub mod ambient;
pub mod deep_star;
pub mod dust;
pub mod entity;
pub mod greeting;
pub mod layer;
pub mod sector;
pub mod sector_pin;
pub mod shooting_star;
pub mod sprite;
