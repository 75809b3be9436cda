mod batch;
mod compress;
mod merge;

pub enum CliRes {
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// `args[1]` is the name of the command.
    ///
    /// Arguments for the command start at `args[2]`
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

pub fn cli() -> CliRes {
    let commands: &[&dyn Cli] = &[&batch::Batch, &compress::Compress, &merge::Merge];

    let args: Vec<String> = std::env::args().collect();

    let help = || {
        println!(
            "\
amigfx

Available commands:"
        );
        for command in commands {
            println!("{}", command.name());
        }
    };

    if args.len() < 2 {
        help();
        return CliRes::Err;
    }

    for command in commands {
        if args[1] == command.name() {
            return command.cli();
        }
    }

    help();
    CliRes::Err
}
