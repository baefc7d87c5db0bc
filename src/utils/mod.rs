pub mod constants;
pub mod dates;
pub mod logging;

pub use constants::*;
pub use dates::{parse_date, trailing_year};
pub use logging::init_logging;
