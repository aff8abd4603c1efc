use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use gorestaurant_api::{endpoints::FoodId, Client};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::app_core::{AppCore, DataEventHandler};
use crate::backend::FoodBackend;
use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::executor;
use crate::events::AppCommand;
use crate::input::KeyEvent;
use crate::logging::init_logging;
use crate::settings::Settings;
use crate::state::{AppState, Preferences};

/// Production handler: runs commands against the real backend
pub struct TaskHandler<B> {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader<B>,
}

impl<B: FoodBackend> TaskHandler<B> {
    pub fn new(data_loader: DataLoader<B>) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            data_loader,
        }
    }
}

impl<B: FoodBackend> DataEventHandler for TaskHandler<B> {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.data_loader);
    }
}

pub struct App {
    settings: Settings,
    food_id: FoodId,
}

impl App {
    pub fn new(settings: Settings, food_id: FoodId) -> Self {
        Self { settings, food_id }
    }

    pub async fn run(&self) -> Result<()> {
        let (log_path, _log_guard) = init_logging()?;

        tracing::info!("gorestaurant starting, logging to {}", log_path.display());
        tracing::info!("Using API at {}", self.settings.api.base_url);

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let api_client = Arc::new(Client::new(&self.settings.api.base_url));
        let data_loader = DataLoader::new(api_client, data_tx);

        let ui_state =
            AppState::with_preferences(self.food_id, Preferences::from(&self.settings));
        let mut core = AppCore::new(TaskHandler::new(data_loader), ui_state);

        let mut terminal = self.init()?;
        let mut event_stream = EventStream::new();

        core.execute(AppCommand::LoadFood {
            food_id: self.food_id,
        });

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, core.state());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = core.state_mut().loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            tracing::debug!("Key press: {:?}", key);
                            core.handle_key(KeyEvent::from(key));
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        // Dropping the core aborts any request still in flight
        drop(core);
        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
