pub mod sanitize;
pub use sanitize::{DesiredType, FilterErrorNot, Sanitize};

pub mod terminal;
pub use terminal::{Terminal, TerminalError};

pub mod header;
pub use header::{header_lines, pretty_header};
