//! Version details embedded by `build.rs`, shown by `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
