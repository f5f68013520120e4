use anyhow::Result;
use clap::Parser;
use inquire::InquireError;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vinometer::config::{AppConfig, Command};
use vinometer::model::{ModelArtifact, ModelLoader};
use vinometer::prediction::Predictor;
use vinometer::ui::cli::{FormSession, InquireDriver, Outcome, Portrait, Renderer};

fn main() -> Result<ExitCode> {
    let config = AppConfig::parse();

    // stderr keeps log lines off stdout; the form defaults to no logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_filter())?)
        .with_writer(io::stderr)
        .init();

    let loader = Arc::new(ModelLoader::from_path(config.model_path.clone()));
    info!(model = %loader.origin(), "starting vinometer");

    let predictor = Predictor::new(loader);
    let renderer = Renderer::new(!config.no_color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.command() {
        Command::Form => {
            let portrait = Portrait::probe(&config.portrait_path);
            renderer.header(&mut out, &portrait)?;

            let session = FormSession::new(&InquireDriver, &predictor, renderer);
            match session.run(&mut out) {
                Ok(shown) => info!(predictions = shown.len(), "form closed"),
                Err(err) if is_cancellation(&err) => info!("form cancelled"),
                Err(err) => return Err(err),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Predict { features } => {
            let outcome = Outcome::evaluate(&predictor, &features);
            renderer.outcome(&mut out, &outcome)?;
            Ok(outcome.exit_code())
        }
        Command::Schema => {
            serde_json::to_writer_pretty(&mut out, &ModelArtifact::schema())?;
            writeln!(out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}
