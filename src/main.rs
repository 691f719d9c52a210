// src/main.rs

use primitive_demos::{app, Demo};

#[tokio::main]
async fn main() {
    app::launch(Demo::Picture).await;
}
