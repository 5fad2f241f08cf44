pub mod bouquet;
pub mod http;
pub mod image;

pub use bouquet::*;
pub use http::*;
pub use image::*;
