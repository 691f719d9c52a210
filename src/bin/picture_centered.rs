// src/bin/picture_centered.rs

use primitive_demos::{app, Demo};

#[tokio::main]
async fn main() {
    app::launch(Demo::PictureCentered).await;
}
