use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;
use crate::printer::PrintInvoker;
use crate::sequence::TicketSequencer;
use crate::templates::TemplateStore;
use crate::ticket_log::TicketLog;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<TemplateStore>,
    pub sequencer: Arc<TicketSequencer>,
    pub ticket_log: Arc<TicketLog>,
    pub printer: Arc<PrintInvoker>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: Config,
        templates: TemplateStore,
        sequencer: TicketSequencer,
        ticket_log: TicketLog,
        printer: PrintInvoker,
    ) -> Self {
        Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
            sequencer: Arc::new(sequencer),
            ticket_log: Arc::new(ticket_log),
            printer: Arc::new(printer),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
