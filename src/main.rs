use clap::Parser;
use colored::Colorize;
use ip_exclude::config::Args;
use ip_exclude::logging;
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init(&args.log_config, &args.log_level)?;
    log::info!("#Start main()");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = ip_exclude::run(&args, &mut out) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
    out.flush()?;
    Ok(())
}
