pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod plot;

pub use convert::{convert_file, Conversion, Document, Record};
pub use error::{ConvertError, MalformedReason, PlotError};
