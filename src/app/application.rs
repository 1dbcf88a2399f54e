//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::helpers::{MenuAction, new_key_bindings};
use crate::services::ServiceHub;
use crate::states::{
    AppState, CatalogGlobalStore, LocaleAction, ProductSearchState, ThemeAction, save_app_state,
    update_app_state_and_save,
};
use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_component::{Root, Theme, ThemeMode, TitleBar};
use tracing::{error, info};

/// Run the Catalog GUI application
pub fn run_app() {
    let app_state = AppState::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load app state, using defaults");
        AppState::new()
    });

    let services = match ServiceHub::new(app_state.catalog().clone()) {
        Ok(services) => services,
        Err(e) => {
            error!(error = %e, "Invalid catalog settings, falling back to defaults");
            match ServiceHub::with_defaults() {
                Ok(services) => services,
                Err(e) => {
                    error!(error = %e, "Failed to create catalog client");
                    return;
                }
            }
        }
    };

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Set up action handlers
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });
        cx.on_action(|action: &ThemeAction, cx: &mut App| {
            let mode = match action {
                ThemeAction::Light => Some(ThemeMode::Light),
                ThemeAction::Dark => Some(ThemeMode::Dark),
                ThemeAction::System => None,
            };
            apply_theme(mode, cx);
            update_app_state_and_save(cx, "set_theme", move |state, _| state.set_theme(mode));
        });
        cx.on_action(|action: &LocaleAction, cx: &mut App| {
            let locale = match action {
                LocaleAction::En => "en",
                LocaleAction::Zh => "zh",
            };
            update_app_state_and_save(cx, "set_locale", move |state, _| {
                state.set_locale(locale.to_string())
            });
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        apply_theme(app_state.theme(), cx);
        let bounds = app_state
            .bounds()
            .copied()
            .unwrap_or_else(|| Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx));

        let app_state = cx.new(|_| app_state);
        cx.set_global(CatalogGlobalStore::new(app_state, services));
        let search_state = cx.new(|cx| {
            let services = cx.global::<CatalogGlobalStore>().services().clone();
            ProductSearchState::new(services)
        });

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitleBar::title_bar_options()),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            window.on_window_should_close(cx, |window, cx| {
                save_window_bounds(window.bounds(), cx);
                true
            });
            let view = cx.new(|cx| Workspace::new(search_state, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });

        match opened {
            Ok(_) => {
                info!("Main window opened");
                cx.activate(true);
            }
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
            }
        }
    });
}

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

/// Persist window bounds synchronously; the app may quit right after
fn save_window_bounds(bounds: Bounds<gpui::Pixels>, cx: &mut App) {
    let store = cx.global::<CatalogGlobalStore>().clone();
    let state = store.update(cx, |state, _| {
        state.set_bounds(bounds);
        state.clone()
    });
    if let Err(e) = save_app_state(&state) {
        error!(error = %e, "Failed to save window bounds");
    }
}
