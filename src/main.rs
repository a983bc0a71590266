// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use iced_notify::logging;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_notify: toast notification demo

USAGE:
  iced_notify [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <PATH>  Directory holding settings.toml
  -v, --verbose        Debug logging (RUST_LOG takes precedence)
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => return usage_error(&err),
    };
    let config_dir: Option<PathBuf> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => return usage_error(&err),
    };

    logging::init_tracing(verbose);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    // Auto-dismiss timers run on their own runtime, independent of Iced's executor.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("notification-timers")
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start timer runtime");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang,
        config_dir,
        runtime: runtime.handle().clone(),
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(err: &pico_args::Error) -> ExitCode {
    eprintln!("{err}\n\n{HELP}");
    ExitCode::FAILURE
}
