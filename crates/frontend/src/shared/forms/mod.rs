//! Entity forms generated from field declarations

mod dialog;
mod fields;
mod values;

pub use dialog::{ConfirmDeleteDialog, ResourceFormDialog};
pub use fields::{FieldDef, FieldKind};
pub use values::{FieldError, FormValues, LineItemDraft};
