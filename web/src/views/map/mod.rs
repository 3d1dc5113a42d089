pub mod map_marker;
pub mod map_marker_popup;
pub mod map_renderer;
pub mod map_wrapper;
pub mod util;
