#[tokio::main]
async fn main() {
    claimbridge::run().await;
}
