//! Optional ready-made tracing subscriber for host applications that do
//! not bring their own.

/// Install a formatted subscriber honoring `RUST_LOG`.
///
/// Call once at startup; panics if a global subscriber is already set.
#[cfg(feature = "tracing-basic")]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
