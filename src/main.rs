use myshell::flags::Flags;
use myshell::shell::Shell;
use std::{env, process};

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("myshell: {}", e);
        process::exit(e.exit_code());
    }

    init_logger(&flags);

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("myshell {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = Shell::new(flags).and_then(|mut shell| shell.run()) {
        eprintln!("myshell: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_logger(flags: &Flags) {
    let level = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
