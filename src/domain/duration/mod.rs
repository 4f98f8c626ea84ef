//! Duration value object, parser and formatters

pub mod format;
pub mod parser;
pub mod unit;
pub mod value;

pub use format::FormatStyle;
pub use parser::parse;
pub use unit::UnitKind;
pub use value::{Components, Duration};
