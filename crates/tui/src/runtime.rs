//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use log::{debug, warn};
use prefpanel_core::OptionCatalog;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;

use crate::config::PanelConfig;
use crate::{App, PanelOutcome};

/// Construct an [`App`] for the catalog and run it until the user submits
/// or quits.
pub fn run(catalog: OptionCatalog, config: PanelConfig) -> Result<PanelOutcome> {
	let mut app = App::new(catalog, config);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user leaves the panel.
	pub fn run(&mut self) -> Result<PanelOutcome> {
		let mut terminal = ratatui::init();
		let _restore = TerminalRestore;
		execute!(stdout(), EnableMouseCapture)?;
		terminal.clear()?;

		let mut pump = EventPump::spawn(terminal_event);
		let result = self.event_loop(&mut terminal, &pump.events);
		let stopped = pump.stop();
		let outcome = result?;
		stopped?;
		Ok(outcome)
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &Receiver<Event>,
	) -> Result<PanelOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match events.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(TryRecvError::Empty) => break,
					Err(TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if let Some(outcome) = outcome {
					debug!("panel finished: {outcome:?}");
					return Ok(outcome);
				}
			}

			terminal.draw(|frame| self.draw(frame))?;
			thread::sleep(Duration::from_millis(16));
		}
	}
}

/// Leaves mouse capture and the alternate screen when dropped.
struct TerminalRestore;

impl Drop for TerminalRestore {
	fn drop(&mut self) {
		if let Err(err) = execute!(stdout(), DisableMouseCapture) {
			warn!("failed to disable mouse capture: {err}");
		}
		ratatui::restore();
	}
}

fn terminal_event() -> Result<Option<Event>> {
	if event::poll(Duration::from_millis(50))? {
		Ok(Some(event::read()?))
	} else {
		Ok(None)
	}
}

/// Background reader forwarding events over a channel.
///
/// The reader is stopped and joined on drop if [`EventPump::stop`] was not
/// called.
struct EventPump {
	running: Arc<AtomicBool>,
	handle: Option<JoinHandle<Result<()>>>,
	events: Receiver<Event>,
}

impl EventPump {
	/// `next` should block briefly and return `None` when nothing arrived,
	/// so the running flag is rechecked.
	fn spawn<F>(mut next: F) -> Self
	where
		F: FnMut() -> Result<Option<Event>> + Send + 'static,
	{
		let (event_tx, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);

		let handle = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if let Some(event) = next()?
					&& event_tx.send(event).is_err()
				{
					break;
				}
			}
			Ok(())
		});

		Self {
			running,
			handle: Some(handle),
			events,
		}
	}

	/// Stop the reader and surface its error, if any.
	fn stop(&mut self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.handle.take().map(JoinHandle::join) {
			None | Some(Ok(Ok(()))) => Ok(()),
			Some(Ok(Err(err))) => Err(err),
			Some(Err(_)) => Err(anyhow!("input event reader panicked")),
		}
	}
}

impl Drop for EventPump {
	fn drop(&mut self) {
		if let Err(err) = self.stop() {
			warn!("{err:#}");
		}
	}
}
