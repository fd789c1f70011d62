mod record;
mod report;

pub use record::{FIELD_ID, ServiceRecord, resolve_record};
pub use report::{Header, REPORT_FORMAT_VERSION, ReconcileReport, ReconcileStatus, ReportBuilder};
