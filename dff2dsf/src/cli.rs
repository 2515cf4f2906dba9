use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("dff2dsf")
        .about("Convert DSDIFF (.dff) audio files to DSF (.dsf)")
        .arg(
            Arg::new("inputs")
                .value_name("FILE")
                .help("DFF files to convert; each output lands next to its input")
                .required(true)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
}
