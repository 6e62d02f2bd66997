//! Termcell - cell matching for text-mode image rendering
//!
//! Configurable front end to the `cell-kernel` primitives: picks the kernel
//! backend and the quantization palette from a YAML configuration and
//! exposes the operations through [`CellMatcher`].

pub mod config;
pub mod error;
pub mod matcher;

pub use cell_kernel;
pub use config::{BackendName, KernelConfig, PaletteName, BACKEND_ENV};
pub use error::{ConfigError, TermcellError};
pub use matcher::CellMatcher;
