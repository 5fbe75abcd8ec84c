fn main() {

    // 1. Parse commandline arguments
    let cli_args = placard::args::parse_cli_args();

    let result = match cli_args.command {
        // 2. Run the placement process on the targeted stages
        placard::args::Command::Run(run_args) => {
            match placard::build_targets(run_args) {
                Ok(targets) => placard::run_process(targets),
                Err(err) => Err(err),
            }
        },
        // 3. Or display an example config file
        placard::args::Command::Example(example_args) => {
            placard::example::display_config(example_args)
        },
    };

    if let Err(err) = result {
        println!("PROCESS ERROR!");
        println!("{}", err);
        std::process::exit(1);
    }
}
