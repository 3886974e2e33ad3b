/// Initializes the tracing/logging infrastructure for the demo binary.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Demo milestones and rejected DTOs
/// - `RUST_LOG=debug` - Also every mapper input, logged once per call
/// - `RUST_LOG=trace` - Also calls made with an absent input
/// - `RUST_LOG=car_mapper=debug` - Debug only for this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
