use std::path::Path;

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to load the configuration and call `run_server` from the
// crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_config(Path::new("config.toml"))?;
    let addr = settings.server.bind_addr()?;
    web_server::run_server(addr, &settings).await
}
