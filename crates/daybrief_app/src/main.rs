use std::process::ExitCode;

mod platform;

fn main() -> ExitCode {
    match platform::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("daybrief: {err}");
            ExitCode::FAILURE
        }
    }
}
