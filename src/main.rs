use std::process::ExitCode;

use clap::Parser;

mod cli;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    init_logging(args.verbose);
    log::debug!("running {:?}", args.command);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli::run(&args.command, &mut out) {
        Ok(code) => ExitCode::from(code),
        Err(e) => ExitCode::from(cli::report_error(e.as_ref(), &mut std::io::stderr())),
    }
}
