pub mod composer;
pub mod export;
pub mod printer;
pub mod printing;
pub mod renderer;

pub use composer::{DraftState, DraftView, InvoiceComposer};
pub use export::history_to_csv;
pub use printer::{PrintSink, TextPrinter};
pub use printing::PrintService;
pub use renderer::InvoiceRenderer;
