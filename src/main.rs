// SPDX-License-Identifier: GPL-3.0-only

use app::PhotoPager;
use iced::window::{Position, Settings};
use tracing_subscriber::EnvFilter;

mod app;
mod i18n;
mod photopager;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("photopager=info,photopager_core=info,photopager_utils=info")
        }))
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    iced::application(PhotoPager::title, PhotoPager::update, PhotoPager::view)
        .theme(PhotoPager::theme)
        .window(Settings {
            position: Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .run_with(PhotoPager::new)
}
