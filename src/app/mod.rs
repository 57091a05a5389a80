// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, the generation
//! lifecycle and the result presenter.
//!
//! The `App` struct wires together the montage domain, localization and
//! persisted preferences, and translates messages into side effects such as
//! file reads, generation requests and saving the montage.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::generation::{GeminiGenerator, MontageGenerator};
use crate::i18n::I18n;
use crate::montage::{ImageSlot, Lifecycle, MontageForm};
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::uploader::{self, DropGesture};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: Theme,
    form: MontageForm,
    lifecycle: Lifecycle,
    /// One uploader per [`ImageSlot`], in [`ImageSlot::ALL`] order.
    uploaders: Vec<uploader::State>,
    drop_gesture: DropGesture,
    preview: preview::State,
    spinner_rotation: f32,
    generator: Arc<dyn MontageGenerator>,
    /// Persisted application state (last save and open directories).
    app_state: persisted_state::AppState,
    /// Data directory override for `app_state`.
    data_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lifecycle", &self.lifecycle.state())
            .field("form_valid", &self.form.is_valid())
            .field("preview_open", &self.preview.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and persisted state, and connects the Gemini backend
    /// described by the configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);
        let generator = Arc::new(GeminiGenerator::new(config.generation.gemini_settings()));
        let mut app = Self::with_generator(flags.lang, &config, generator);

        app.data_dir = flags.data_dir.map(PathBuf::from);
        let (app_state, state_warning) = persisted_state::AppState::load_from(app.data_dir.clone());
        app.app_state = app_state;

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            "application started"
        );

        (app, Task::none())
    }

    /// Builds the application around an arbitrary generation backend.
    #[must_use]
    pub fn with_generator(
        lang: Option<String>,
        config: &config::Config,
        generator: Arc<dyn MontageGenerator>,
    ) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            theme: config.general.theme_mode.theme(),
            form: MontageForm::new(),
            lifecycle: Lifecycle::new(),
            uploaders: ImageSlot::ALL.into_iter().map(uploader::State::new).collect(),
            drop_gesture: DropGesture::default(),
            preview: preview::State::default(),
            spinner_rotation: 0.0,
            generator,
            app_state: persisted_state::AppState::default(),
            data_dir: None,
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.preview.is_open());
        let tick_sub = subscription::create_tick_subscription(
            self.lifecycle.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            lifecycle: &mut self.lifecycle,
            uploaders: &mut self.uploaders,
            drop_gesture: &mut self.drop_gesture,
            preview: &mut self.preview,
            spinner_rotation: &mut self.spinner_rotation,
            generator: &self.generator,
            persisted: &mut self.app_state,
            data_dir: self.data_dir.as_ref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Result(result_message) => {
                update::handle_result_message(&mut ctx, result_message)
            }
            Message::Preview(preview_message) => {
                self.preview.handle(preview_message);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenDialogResult { slot, path } => {
                update::handle_open_dialog_result(&mut ctx, slot, path)
            }
            Message::ImageRead { slot, path, result } => {
                update::handle_image_read(&mut ctx, slot, &path, result)
            }
            Message::FilesHovered => update::handle_files_hovered(&mut ctx),
            Message::FilesHoveredLeft => update::handle_files_hovered_left(&mut ctx),
            Message::FileDropped(path) => {
                update::handle_file_dropped(&mut ctx, path, std::time::Instant::now())
            }
            Message::GenerationCompleted { id, result } => {
                update::handle_generation_completed(&mut ctx, id, result)
            }
            Message::SaveDialogResult { image, path } => {
                update::handle_save_dialog_result(image, path)
            }
            Message::SaveCompleted { path, result } => {
                update::handle_save_completed(&mut ctx, &path, result)
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            lifecycle: &self.lifecycle,
            uploaders: &self.uploaders,
            preview: &self.preview,
            spinner_rotation: self.spinner_rotation,
            notifications: &self.notifications,
        })
    }
}
