pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod surface_size;
pub mod view_state;
