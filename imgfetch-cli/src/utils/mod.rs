mod files;
mod headers;

pub use self::files::{create_dirs, output_path};
pub use self::headers::parse_header;
