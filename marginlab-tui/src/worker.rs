//! Background worker thread — clipboard writes run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The write
//! has exactly two outcomes and no retry; the main loop drains responses
//! without blocking, so typing continues while the host handles the write.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::clipboard::write_clipboard;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    CopySummary(String),
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    CopyDone,
    CopyFailed { error: String },
}

/// Spawn the background worker thread.
pub fn spawn_worker(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) -> JoinHandle<()> {
    thread::Builder::new()
        .name("marginlab-worker".into())
        .spawn(move || {
            worker_loop(rx, tx);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::CopySummary(text)) => {
                let resp = match write_clipboard(&text) {
                    Ok(()) => WorkerResponse::CopyDone,
                    Err(e) => WorkerResponse::CopyFailed {
                        error: e.to_string(),
                    },
                };
                if tx.send(resp).is_err() {
                    break;
                }
            }
        }
    }
}
