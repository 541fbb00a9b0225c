pub mod channels;
pub mod filters;
pub mod pipeline;
pub mod resize;
