//! Fetch the comments of one image and print the resulting list state.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::sync::{Arc, mpsc};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use image_comments::config::ImageCommentsApiSettings;
use image_comments::domain::ports::ImageCommentsLoader;
use image_comments::outbound::http::ReqwestHttpClient;
use image_comments::outbound::image_comments_api::RemoteImageCommentsLoader;
use image_comments::presentation::{
    EnglishRelativeDateFormatter, ImageCommentsListPresenter, ImageCommentsListStateStore,
    ImageCommentsListViewState, LocalizedStringTables,
};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

const PROGRAM_NAME: &str = "fetch-image-comments";

/// `fetch-image-comments` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fetch-image-comments",
    about = "Load the comments of one image and print the presented list state",
    version
)]
struct CliArgs {
    /// Identifier of the image whose comments are fetched.
    #[arg(long = "image-id", value_name = "uuid")]
    image_id: Uuid,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let args = CliArgs::parse();
    // Arguments belong to clap; settings come from the environment only.
    let settings = ImageCommentsApiSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
        .map_err(|error| eyre!("load image comments API settings: {error}"))?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let client = ReqwestHttpClient::with_identity(
        runtime.handle().clone(),
        settings.timeout(),
        settings.identity(),
    )
    .wrap_err("build HTTP client")?;
    let base_url = settings.base_url().wrap_err("parse IMAGE_COMMENTS_API_BASE_URL")?;
    let loader = RemoteImageCommentsLoader::new(Arc::new(client), base_url)?;

    let store = Arc::new(ImageCommentsListStateStore::new());
    let presenter = ImageCommentsListPresenter::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(LocalizedStringTables::english()),
        Arc::new(EnglishRelativeDateFormatter),
        Arc::new(DefaultClock),
    );

    presenter.did_start_loading_comments();
    let (sender, receiver) = mpsc::channel();
    loader.load(
        args.image_id,
        Box::new(move |result| {
            if let Err(error) = sender.send(result) {
                warn!(%error, "image comments result had no receiver");
            }
        }),
    );
    let result = receiver
        .recv()
        .wrap_err("image comments request ended without a result")?;
    presenter.did_finish_loading(&result);

    print_state(&store.snapshot());
    Ok(())
}

fn print_state(state: &ImageCommentsListViewState) {
    println!("is_loading={}", state.is_loading);
    if let Some(message) = &state.error_message {
        println!("error={message}");
    }
    println!("comment_count={}", state.comments.len());
    for comment in &state.comments {
        println!(
            "{} ({}): {}",
            comment.author_username, comment.creation_date_text, comment.message
        );
    }
}
