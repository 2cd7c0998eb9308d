use std::process::ExitCode;

fn main() -> ExitCode {
    match the_themer::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
