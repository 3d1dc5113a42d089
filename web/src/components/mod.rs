pub mod error;
pub mod loading;
pub mod navbar;

pub use error::{notify_failure, ErrorView, StoppedView};
pub use loading::LoadingView;
pub use navbar::Navbar;
