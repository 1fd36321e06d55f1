#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use imageclass_core::{ClientConfig, HttpPredictionClient, DEFAULT_API_URL};

use crate::context::SharedClient;

/// imageclass - Image classification client
#[derive(Parser, Debug)]
#[command(name = "imageclass-desktop")]
#[command(about = "Drop an image, send it to a prediction service, see the class probabilities")]
struct Args {
    /// Base URL of the prediction service (POST <url>/predict)
    #[arg(long, env = "IMAGECLASS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 720.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    imageclass_core::logging::init();

    let args = Args::parse();

    let config = ClientConfig::new(&args.api_url)
        .with_context(|| format!("invalid --api-url '{}'", args.api_url))?;

    tracing::info!("Prediction endpoint: {}", config.predict_url());

    let client: SharedClient = Arc::new(
        HttpPredictionClient::new(config).context("failed to build HTTP client")?,
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Image Classifier")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(client)
        .launch(app::App);

    Ok(())
}
