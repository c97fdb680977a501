pub mod composite;
pub mod cover;
pub mod pipeline;
pub mod resize;
