pub mod header;
pub mod layout;
pub mod summary;
pub mod theme;

pub use header::{HEADER_FILE_NAME, header_content, write_header};
pub use layout::layout_lines;
pub use summary::summary_lines;
pub use theme::Theme;
