#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bannergen_server::start().await
}
