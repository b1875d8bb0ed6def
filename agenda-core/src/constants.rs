//! Shared literals.
//!
//! The Portuguese status strings are part of the product's spreadsheet and
//! export contracts and must stay byte-for-byte stable.

/// Filename of the persisted collection inside the data directory.
pub const STORAGE_FILE: &str = "meetings.json";

/// Status literal sent to the spreadsheet and written for active records.
pub const STATUS_ACTIVE: &str = "Ativa";

/// Status label for archived records in table views.
pub const STATUS_ARCHIVED: &str = "Arquivada";

/// Status label for archived records in CSV/PDF exports.
pub const STATUS_DELETED: &str = "Excluída";

/// Label an empty officer field collapses to in the statistics view.
pub const OFFICER_PLACEHOLDER: &str = "N/E";

/// How long a toast stays visible, in seconds.
pub const TOAST_TTL_SECS: u64 = 5;

/// CSV export header row.
pub const CSV_HEADER: &str = "Data,Hora,Assunto,Oficial,Local,Obs,Status";
