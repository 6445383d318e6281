use clap::Parser;
use promptlab_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    promptlab_lib::init_tracing();
    promptlab_lib::run(config).await
}
