//! Edible-coating and biogas estimators
//!
//! Two pure calculators plus the session state a front end keeps around
//! them. The estimators never fail: unknown categories fall back to default
//! factors and non-numeric text coerces to zero.

pub mod biogas;
pub mod coating;
pub mod console;
pub mod error;
pub mod models;
pub mod numeric;
pub mod session;

pub use biogas::estimate_biogas;
pub use coating::estimate_coating;
pub use error::InputError;
pub use models::{
    ApplicationMethod, BiogasRecord, BiogasRequest, BiogasResult, CoatingKind, CoatingRequest,
    CoatingResult, ObjectKind, WasteType,
};
pub use session::{DEFAULT_EXPORT_FILE, ExportDocument, Recorded, Session};
