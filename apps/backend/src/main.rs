#[tokio::main]
async fn main() -> anyhow::Result<()> {
    expound_backend::run().await
}
