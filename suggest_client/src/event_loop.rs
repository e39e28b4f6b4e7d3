//! Single-threaded event loop hosting the suggestion engine.
//!
//! Crossbeam `select!` multiplexes UI events with the engine's debounce deadline:
//! the loop blocks on the event channel for at most the time left until the pending
//! recomputation, then polls the engine. When the event source closes, a pending
//! recomputation is still allowed to fire before the loop returns.
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use crossbeam_channel::{never, select, Receiver};
use log::{info, warn};
use suggest_common::{SuggestionEngine, SuggestionView};

use crate::model::event::UiEvent;

/// Longest wait between shutdown checks while nothing is pending.
const IDLE_TICK: Duration = Duration::from_millis(200);

/// Run until `:quit`, Ctrl+C, or end of input with nothing left pending.
pub fn run<V: SuggestionView>(
    engine: &mut SuggestionEngine<V>,
    events: Receiver<UiEvent>,
    shutdown: Arc<AtomicBool>,
) {
    let closed = never::<UiEvent>();
    let mut input_open = true;

    while !shutdown.load(Ordering::Relaxed) {
        let deadline = engine.next_deadline();
        if !input_open && deadline.is_none() {
            break;
        }
        let wait = deadline
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_TICK)
            .min(IDLE_TICK);
        let source = if input_open { &events } else { &closed };

        select! {
            recv(source) -> msg => match msg {
                Ok(UiEvent::Quit) => break,
                Ok(event) => handle_event(engine, event),
                Err(_) => {
                    info!("Input closed");
                    input_open = false;
                }
            },
            default(wait) => {}
        }

        engine.poll(Instant::now());
    }
}

fn handle_event<V: SuggestionView>(engine: &mut SuggestionEngine<V>, event: UiEvent) {
    match event {
        UiEvent::Input(value) => {
            engine.on_input_changed(&value, Instant::now());
        }
        UiEvent::Select(index) => {
            if let Err(e) = engine.on_suggestion_selected(index) {
                warn!("{}", e);
            }
        }
        UiEvent::ClickOutside => engine.on_outside_click(),
        UiEvent::LogoError(index) => match engine.on_logo_error(index) {
            Ok(true) => {}
            Ok(false) => info!("Suggestion {} already shows its placeholder", index + 1),
            Err(e) => warn!("{}", e),
        },
        UiEvent::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TerminalView;
    use crossbeam_channel::unbounded;
    use suggest_common::{Company, CompanyStore, EngineConfig};

    fn engine() -> SuggestionEngine<TerminalView<Vec<u8>>> {
        let store = CompanyStore::with_companies(vec![
            Company::new("Apple Inc.", "AAPL"),
            Company::new("Alphabet Inc.", "GOOGL"),
            Company::new("Amazon.com", "AMZN"),
        ]);
        let config = EngineConfig {
            debounce: Duration::from_millis(200),
            ..EngineConfig::default()
        };
        SuggestionEngine::new(store, TerminalView::new(Vec::new()), config)
    }

    #[test]
    fn pending_input_is_flushed_after_input_closes() {
        let mut engine = engine();
        let (tx, rx) = unbounded();
        for value in ["a", "am", "amz"] {
            tx.send(UiEvent::Input(value.into())).unwrap();
        }
        drop(tx);

        run(&mut engine, rx, Arc::new(AtomicBool::new(false)));

        assert_eq!(engine.recomputations(), 1);
        assert_eq!(engine.suggestions().len(), 1);
        assert_eq!(engine.suggestions()[0].company.ticker, "AMZN");
    }

    #[test]
    fn quit_stops_before_pending_work() {
        let mut engine = engine();
        let (tx, rx) = unbounded();
        tx.send(UiEvent::Input("a".into())).unwrap();
        tx.send(UiEvent::Quit).unwrap();

        run(&mut engine, rx, Arc::new(AtomicBool::new(false)));

        assert_eq!(engine.recomputations(), 0);
    }

    #[test]
    fn shutdown_flag_ends_the_loop() {
        let mut engine = engine();
        let (_tx, rx) = unbounded::<UiEvent>();
        run(&mut engine, rx, Arc::new(AtomicBool::new(true)));
        assert_eq!(engine.recomputations(), 0);
    }
}
