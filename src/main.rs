mod cli;
mod error;
mod launcher;
mod model;
mod store;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SEE_LOG", "warn")).init();
    cli::run()
}
