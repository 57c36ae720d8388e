pub mod loader;
pub mod sample;

pub use loader::{load_csv, parse_csv};
pub use sample::{scale_pixels, target_vector, Sample};
