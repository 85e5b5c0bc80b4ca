//! Infrastructure wiring: turns configuration and adapters into `AppState`.

pub mod state;
