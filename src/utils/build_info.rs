//! Build metadata embedded by `build.rs`, as printed by `version`.

macro_rules! embedded {
    ($key:literal) => {
        match option_env!(concat!("TALLY_BUILD_", $key)) {
            Some(value) => value,
            None => "unknown",
        }
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label/value rows in display order. The git row reads `<hash> (clean|dirty)`.
pub const DETAILS: [(&str, &str); 5] = [
    ("Build", embedded!("GIT")),
    ("Built at", embedded!("TIMESTAMP")),
    ("Target", embedded!("TARGET")),
    ("Profile", embedded!("PROFILE")),
    ("Rustc", embedded!("RUSTC")),
];
