pub mod curate;
pub mod io;
pub mod sampler;

mod error;

pub use curate::{CurationReport, curate};
pub use error::Error;
pub use sampler::{SamplingMode, sample_by_year};

pub type Result<T, E = Error> = std::result::Result<T, E>;
