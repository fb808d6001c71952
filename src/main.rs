use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match modescale::run(std::env::args_os().skip(1)) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{}", e);
            println!("Invalid input");
            ExitCode::FAILURE
        }
    }
}
