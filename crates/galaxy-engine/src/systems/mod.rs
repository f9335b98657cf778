pub mod compositor;
pub mod sector_binding;
pub mod sun;
