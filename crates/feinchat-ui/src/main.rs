//! Fein-AI Desktop Application
//!
//! GPUI-based investment chat client with a simulated assistant.

use feinchat_core::{ChatFixtures, SessionState};
use feinchat_ui::Theme;
use gpui::*;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod window;

use window::FeinChatWindow;

/// Loads SVG assets from the `assets/` directory next to the executable,
/// falling back to the working directory during `cargo run`.
struct FileAssetSource {
    base_path: PathBuf,
}

impl FileAssetSource {
    fn new() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        let base_path = exe_dir
            .iter()
            .flat_map(|dir| {
                [
                    dir.join("assets"),
                    dir.join("../assets"),
                    dir.join("../../assets"),
                ]
            })
            .chain([PathBuf::from("assets")])
            .find(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from("assets"));

        info!("Asset base path: {:?}", base_path);
        Self { base_path }
    }
}

impl AssetSource for FileAssetSource {
    fn load(&self, path: &str) -> anyhow::Result<Option<Cow<'static, [u8]>>> {
        let full_path = self.base_path.join(path);
        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Asset not found: {:?}", full_path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, path: &str) -> anyhow::Result<Vec<SharedString>> {
        let entries = std::fs::read_dir(self.base_path.join(path))
            .map(|dir| {
                dir.flatten()
                    .filter_map(|entry| entry.file_name().into_string().ok())
                    .map(SharedString::from)
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Fein-AI v{}", env!("CARGO_PKG_VERSION"));

    // Build the chat session around the seed fixtures before touching the UI
    let session = match SessionState::new(ChatFixtures::builtin()) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to build chat session: {}", e);
            return;
        }
    };

    // Start GPUI application with asset loading
    App::new()
        .with_assets(FileAssetSource::new())
        .run(move |cx: &mut AppContext| {
            let theme = Theme::dark();
            info!("Theme initialized: dark mode");

            // Open main window
            let window_options = WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Fein-AI".into()),
                    appears_transparent: true,
                    traffic_light_position: Some(point(px(9.0), px(9.0))),
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(100.0), px(100.0)),
                    size: size(px(1200.0), px(800.0)),
                })),
                focus: true,
                show: true,
                kind: WindowKind::Normal,
                is_movable: true,
                window_background: WindowBackgroundAppearance::Opaque,
                app_id: Some("ai.fein.chat".to_string()),
                ..Default::default()
            };

            if let Err(e) = cx.open_window(window_options, |cx| {
                cx.new_view(|cx| FeinChatWindow::new(cx, theme, session))
            }) {
                error!("Failed to open window: {}", e);
            }
        });
}
