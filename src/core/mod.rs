pub use bins::{Bins, Histogram};
pub use sampler::{BoxMuller, create_list};

mod bins;
mod sampler;
