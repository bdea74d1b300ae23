pub use numbers::{leading_float, leading_int};
pub use prompt::enter_next_param;

mod numbers;
mod prompt;
