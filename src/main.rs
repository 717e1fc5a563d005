use ssoquery::core;
use ssoquery::status::ExitStatus;

/// Entry point - collects arguments and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    core::run(args)
}
