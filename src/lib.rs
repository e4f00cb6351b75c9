#![doc(test(attr(deny(warnings))))]

//! Tally Core wires the expense store, budgeting services and the terminal
//! shell that presents them.

pub mod cli;
pub mod core;
pub mod currency;
pub mod utils;

pub use tally_config as config;
pub use tally_domain as domain;
pub use tally_store as store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
