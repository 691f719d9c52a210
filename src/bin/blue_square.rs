// src/bin/blue_square.rs

use primitive_demos::{app, Demo};

#[tokio::main]
async fn main() {
    app::launch(Demo::BlueSquare).await;
}
