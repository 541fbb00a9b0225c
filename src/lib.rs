#![doc = r#"
cloudbake — batch image pipelines for hero artwork.

Two independent, sequential pipelines over a list of image files:

- **bake**: decode as RGBA, split off alpha, desaturate to ITU-R 601-2 luma,
  apply a linear contrast then a multiplicative brightness adjustment, reattach
  the untouched alpha and overwrite the source as lossy WebP.
- **optimize**: downsample anything wider than a target width with Lanczos3
  (aspect ratio kept), re-encode to lossy WebP next to the source, report the
  size change, then delete the source.

Each file is processed on its own: a failure is logged, recorded in the
`BatchReport`, and the batch moves on.

Bake a directory
----------------
```rust,no_run
use std::path::Path;
use cloudbake::{bake_directory, BakeParams, FileFilter};

fn main() -> cloudbake::Result<()> {
    let report = bake_directory(
        Path::new("app-v1/public/images"),
        &FileFilter::new("cloud-hero", "webp"),
        &BakeParams::default(),
    )?;
    println!("baked={} failed={}", report.processed, report.failed);
    Ok(())
}
```

Optimize explicit files
-----------------------
```rust,no_run
use cloudbake::{optimize_files, OptimizeParams};

let params = OptimizeParams {
    target_width: 1080,
    ..OptimizeParams::default()
};
let report = optimize_files(&["images/cloud-hero-1.png"], &params);
for file in &report.files {
    println!("{:?}: {:?}", file.path, file.status);
}
```

Error handling
--------------
Single-file entrypoints return `cloudbake::Result<T>`; batch entrypoints only
fail for process-level problems such as a missing directory.

```rust,no_run
use std::path::Path;
use cloudbake::{bake_file, BakeParams, Error};

match bake_file(Path::new("cloud-hero-2.webp"), &BakeParams::default()) {
    Ok(report) => println!("{:?}", report.output),
    Err(Error::Decode { path, source }) => eprintln!("corrupt {path:?}: {source}"),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points and reports.
- [`core`] — channel split/merge, filters, resizing, parameters.
- [`io`] — directory scan, decoding, WebP writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::{BakeParams, EncodeSettings, OptimizeParams};
pub use crate::core::processing::channels::ChannelSet;
pub use error::{Error, Result};
pub use types::{ContrastAnchor, FileStatus, ImageFormat};

pub use io::{FileFilter, load_image, scan_directory};

pub use api::{
    BatchReport, FileReport, bake_directory, bake_file, bake_files, optimize_directory,
    optimize_file, optimize_files,
};
