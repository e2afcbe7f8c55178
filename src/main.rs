use std::process;

fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = wot_td_import::interfaces::cli::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
