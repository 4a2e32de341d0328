//! Interactive single-page story manager.
//!
//! The loop owns the [`ViewState`]; store commands run on spawned tasks and
//! report back through a channel, so drawing never waits on the network.

mod input;
mod layout;
mod render;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use storyboard_core::{render_screen, update, Command, Msg, StoryService, StoryStore, ViewState};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use input::{handle_event, Action, PageState};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the page until the user quits, restoring the terminal afterwards.
pub async fn run<S: StoryStore + 'static>(service: StoryService<S>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;

    let result = run_page(&mut terminal, Arc::new(service)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn run_page<B: Backend, S: StoryStore + 'static>(
    terminal: &mut Terminal<B>,
    service: Arc<StoryService<S>>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = unbounded_channel();
    let (mut state, startup) = ViewState::initial();
    dispatch(&service, &tx, startup);
    let mut page = PageState::default();

    loop {
        drain_responses(&mut rx, &mut state, &service, &tx);

        let screen = render_screen(&state);
        page.clamp(screen.cards.len());
        terminal.draw(|frame| render::draw(frame, &screen, &page))?;

        if !event::poll(INPUT_POLL)? {
            continue;
        }
        match handle_event(&mut page, &screen, event::read()?) {
            Action::None => {}
            Action::Quit => break,
            Action::Send(msg) => {
                if let Some(command) = update(&mut state, msg) {
                    dispatch(&service, &tx, command);
                }
            }
        }
    }

    log::info!(
        "event=page_exit module=cli status=ok pending_requests={}",
        state.pending_requests
    );
    Ok(())
}

fn drain_responses<S: StoryStore + 'static>(
    rx: &mut UnboundedReceiver<Msg>,
    state: &mut ViewState,
    service: &Arc<StoryService<S>>,
    tx: &UnboundedSender<Msg>,
) {
    while let Ok(msg) = rx.try_recv() {
        if let Some(command) = update(state, msg) {
            dispatch(service, tx, command);
        }
    }
}

// Responses are applied in arrival order; nothing cancels an in-flight call.
fn dispatch<S: StoryStore + 'static>(
    service: &Arc<StoryService<S>>,
    tx: &UnboundedSender<Msg>,
    command: Command,
) {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let msg = service.execute(command).await;
        let _ = tx.send(msg);
    });
}
