pub mod coverage;
pub mod independence;
pub mod mix;
pub mod ratio;
pub mod types;

pub use coverage::{handle_coverage, AxisInfo, CoverageRequest, CoverageResponse, __path_handle_coverage};
pub use independence::{
    handle_independence, IndependenceRequest, IndependenceResponse, __path_handle_independence,
};
pub use mix::{handle_mix, MixRequest, MixResponse, __path_handle_mix};
pub use ratio::{handle_ratio, RatioRequest, RatioResponse, __path_handle_ratio};
pub use types::{resolve_basis, ColorInput, RgbValue};
