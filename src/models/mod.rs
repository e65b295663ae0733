pub mod document;
pub mod draft;
pub mod invoice;
pub mod line_item;
pub mod sender;

pub use document::{DocumentRow, RenderedInvoice};
pub use draft::{InvoiceDraft, ItemField};
pub use invoice::{InvoiceRecord, InvoiceStatus, NewInvoice};
pub use line_item::{compute_total, format_amount, LineItem, PriceInput};
pub use sender::SenderProfile;
