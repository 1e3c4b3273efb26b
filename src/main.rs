use clap::Parser;
use runic::Config;

fn main() {
    env_logger::init();

    let config = Config::parse();
    if runic::run(config).is_err() {
        std::process::exit(1);
    }
}
