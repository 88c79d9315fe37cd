#[tokio::main]
async fn main() -> anyhow::Result<()> {
    druidgen_server::start().await
}
