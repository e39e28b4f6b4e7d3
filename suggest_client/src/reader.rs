//! Reading UI events from a line-oriented source.
//!
//! Stdin is read on a background thread so the event loop can keep waiting on the
//! debounce deadline. Each line is parsed into a `UiEvent` and sent over a
//! `crossbeam_channel`; the channel closes when the source is exhausted. Bytes that
//! are not valid UTF-8 are replaced rather than ending the session.
use std::io::BufRead;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, error, info, warn};
use suggest_common::SuggestError;

use crate::model::event::UiEvent;

/// Helper type spawning the line reader thread.
pub struct EventReader;

impl EventReader {
    /// Spawn a thread forwarding every parsed line of `source` to `tx`.
    ///
    /// Unparsable lines are logged and skipped. The thread stops at end of input, on a
    /// read error, when the receiver is gone, or once `shutdown` is set.
    pub fn start<R>(source: R, tx: Sender<UiEvent>, shutdown: Arc<AtomicBool>) -> thread::JoinHandle<()>
    where
        R: BufRead + Send + 'static,
    {
        thread::spawn(move || {
            if let Err(e) = Self::forward_lines(source, &tx, &shutdown) {
                error!("Input reader stopped: {}", e);
            }
            info!("Input reader stopping...");
        })
    }

    fn forward_lines<R: BufRead>(
        mut source: R,
        tx: &Sender<UiEvent>,
        shutdown: &AtomicBool,
    ) -> Result<(), SuggestError> {
        let mut buf = Vec::new();
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            buf.clear();
            if source.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            match line.parse::<UiEvent>() {
                Ok(event) => {
                    debug!("Read event {:?}", event);
                    tx.send(event)
                        .map_err(|e| SuggestError::ChannelSend(e.to_string()))?;
                }
                Err(e) => warn!("{}", e),
            }
        }
        Ok(())
    }
}
