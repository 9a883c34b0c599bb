//! Daily content pipeline binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reel_media::{check_ffmpeg, ReelCompiler};
use reel_pipeline::{
    FileFragmentSource, Orchestrator, PipelineConfig, Scheduler, TextCardRenderer,
};
use reel_text::TextTransformer;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("reel_pipeline=info".parse().expect("static directive"))
        .add_directive("reel_media=info".parse().expect("static directive"))
        .add_directive("reel_text=info".parse().expect("static directive"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting reel-pipeline");

    let config = PipelineConfig::from_env();
    info!(?config, "pipeline config loaded");

    if check_ffmpeg().is_err() {
        warn!("ffmpeg not found in PATH; compile cycles will fail until it is installed");
    }

    let source = Arc::new(FileFragmentSource::new(&config.inbox_dir));
    let renderer = Arc::new(TextCardRenderer::new(&config.image_dir, &config.settings));
    let compiler = Arc::new(
        ReelCompiler::new(
            &config.output_dir,
            config.settings.clone(),
            config.encoding.clone(),
        )
        .with_audio_track(&config.audio_track),
    );

    let orchestrator = Orchestrator::new(
        source,
        renderer,
        compiler,
        TextTransformer::new(),
        config.clone(),
    );

    let mut scheduler = Scheduler::new(&config);
    scheduler.run(&orchestrator).await;

    info!("pipeline shutdown complete");
}
