//! Configuration for schedule computation.

/// Options threaded through the scheduling pipeline.
#[derive(Clone, Debug, Default)]
pub struct CpmConfig {
    /// Diagnostic verbosity: 0=silent, 1=stages, 2=events, 3=trace.
    pub verbosity: u8,
}

impl CpmConfig {
    /// Config with the given verbosity.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self { verbosity }
    }
}
