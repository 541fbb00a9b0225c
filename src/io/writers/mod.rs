pub mod webp;

pub use self::webp::{encode_webp, replace_with_webp, write_webp};
