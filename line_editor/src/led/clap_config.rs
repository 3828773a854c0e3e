// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

use crate::DEFAULT_TAB_STOP;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "led")]
#[command(about = "🔖 Inspect a file the way the line editor sees it 🖍️")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
      help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide the path of a file to load. Markers are read from `<file path>_metadata` if it exists.\nUSAGE 📓:\n  led [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: String,

    #[arg(long, short = 't', default_value_t = DEFAULT_TAB_STOP, help = "Width of a tab stop.")]
    pub tab_stop: usize,

    #[arg(
        long,
        short = 'd',
        help = "Print every rendered line followed by its highlight tags, one char per column."
    )]
    pub dump_tags: bool,

    #[arg(long, short = 'f', help = "Move the caret to the first match of this query.")]
    pub find: Option<String>,

    #[arg(
        long,
        short = 's',
        help = "Write the file and its marker metadata back to disk."
    )]
    pub save: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `led_log.txt` for debugging."
    )]
    pub enable_logging: bool,
}
