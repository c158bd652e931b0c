use std::process::ExitCode;

fn main() -> ExitCode {
    match tighty_tile::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
