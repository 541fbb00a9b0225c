//! I/O layer: directory scanning, image decoding, and the lossy WebP writers.
pub mod reader;
pub use reader::{file_size_kib, load_image};

pub mod scan;
pub use scan::{FileFilter, scan_directory};

pub mod writers;
