//! Prints the best catalog match for each sample description

use vehicle_matcher::demo::{render_report, sample_matcher, SAMPLE_INPUTS};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matcher = sample_matcher();
    print!("{}", render_report(&matcher, SAMPLE_INPUTS));
}
