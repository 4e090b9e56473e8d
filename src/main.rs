use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    instrument_catalog::run(&mut stdout.lock())
}
