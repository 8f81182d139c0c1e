use clap::{command, Arg, Command, ValueHint};

pub fn build_command() -> Command {
    command!().args([
        Arg::new("users")
            .short('u')
            .long("users")
            .alias("profiles")
            .conflicts_with("config")
            .required(false)
            .value_name("USERS")
            .help("Comma-separated profile URLs, IDs or vanity names."),
        Arg::new("config")
            .short('c')
            .long("config-file")
            .alias("config")
            .required(false)
            .value_hint(ValueHint::FilePath)
            .value_name("PATH")
            .help("Path to the YAML config file."),
        Arg::new("out_dir")
            .short('o')
            .long("out-dir")
            .required(false)
            .value_hint(ValueHint::DirPath)
            .value_name("DIR")
            .help("Directory the chart file is written into."),
    ])
}
