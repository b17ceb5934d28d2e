pub mod config;
pub mod converters;
pub mod error;
pub mod facade;
pub mod format;
pub mod io;

pub use config::{ConvertConfig, ConvertConfigBuilder};
pub use converters::{Converter, CsvConverter, HtmlConverter, StringStyle, XmlConverter};
pub use error::{JsonifyError, Result};
pub use facade::{ConversionFacade, convert, labelled};
pub use format::Format;
pub use io::{prettify, read_file, read_stdin};
