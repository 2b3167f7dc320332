//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The raw input strings are the only mutable
//! state; derived values are recomputed from them on demand. The clipboard
//! worker communicates via channels.

use std::sync::mpsc::{Receiver, Sender};

use marginlab_core::{compute, summary_line, MarginResult, RawInputs};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which form row is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SaleTotal,
    OrderCost,
    FreightCost,
    IncludeFreight,
    WarnThreshold,
}

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::SaleTotal => 0,
            Field::OrderCost => 1,
            Field::FreightCost => 2,
            Field::IncludeFreight => 3,
            Field::WarnThreshold => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Field::SaleTotal),
            1 => Some(Field::OrderCost),
            2 => Some(Field::FreightCost),
            3 => Some(Field::IncludeFreight),
            4 => Some(Field::WarnThreshold),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::SaleTotal => "Sale Total",
            Field::OrderCost => "Order Cost",
            Field::FreightCost => "Freight Cost",
            Field::IncludeFreight => "Include Freight",
            Field::WarnThreshold => "Warn Threshold %",
        }
    }

    pub fn next(self) -> Field {
        Field::from_index((self.index() + 1) % 5).unwrap()
    }

    pub fn prev(self) -> Field {
        Field::from_index((self.index() + 4) % 5).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    /// Blocking acknowledgment dialog; any key dismisses it.
    Notice { message: String, level: StatusLevel },
}

/// Top-level application state.
pub struct AppState {
    pub inputs: RawInputs,
    pub active_field: Field,
    pub running: bool,

    // Cross-cutting
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub copy_in_flight: bool,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            inputs: RawInputs::default(),
            active_field: Field::SaleTotal,
            running: true,
            overlay: Overlay::Welcome,
            status_message: None,
            copy_in_flight: false,
            worker_tx,
            worker_rx,
        }
    }

    /// Recompute the derived values for the current inputs.
    pub fn result(&self) -> MarginResult {
        compute(&self.inputs)
    }

    /// The active row's text buffer, if it is a text field.
    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            Field::SaleTotal => Some(&mut self.inputs.sale_total),
            Field::OrderCost => Some(&mut self.inputs.order_cost),
            Field::FreightCost => Some(&mut self.inputs.freight_cost),
            Field::WarnThreshold => Some(&mut self.inputs.warn_threshold),
            Field::IncludeFreight => None,
        }
    }

    /// Clear action: empty the three amount fields, leave settings alone.
    pub fn clear_amounts(&mut self) {
        self.inputs.sale_total.clear();
        self.inputs.order_cost.clear();
        self.inputs.freight_cost.clear();
        self.set_status("Amounts cleared");
    }

    /// Hand the summary line to the worker for a clipboard write.
    pub fn copy_summary(&mut self) {
        if self.copy_in_flight {
            return;
        }
        let line = summary_line(&self.result(), self.inputs.include_freight);
        if self.worker_tx.send(WorkerCommand::CopySummary(line)).is_ok() {
            self.copy_in_flight = true;
            self.set_status("Copying summary...");
        } else {
            self.set_error("Clipboard worker is gone");
        }
    }

    /// Show a blocking acknowledgment dialog.
    pub fn show_notice(&mut self, message: impl Into<String>, level: StatusLevel) {
        let message = message.into();
        self.status_message = Some((message.clone(), level));
        self.overlay = Overlay::Notice { message, level };
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
