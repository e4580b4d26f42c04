pub mod operand;
pub mod render;
pub mod solve;

#[cfg(test)]
mod render_tests;

/// Install a stderr log subscriber for `-v` (folding) or `-vv` (dispatch).
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .without_time()
        .init();
}
