// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_line_editor::{CLIArg, run, try_initialize_logging_global};

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing::Level::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    run(&cli_arg, &mut std::io::stdout().lock())?;

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}
