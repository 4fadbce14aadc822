use folio_models::contact::{FieldName, FormRecord};
use folio_view_contracts::FormView;
use tracing::warn;

/// Take a snapshot of the current field values.
///
/// Fields without a bound control are left out of the record and therefore
/// validate like empty strings.
pub fn collect(view: &impl FormView) -> FormRecord {
    FieldName::ALL
        .into_iter()
        .filter_map(|field| {
            let value = view.field_value(field);
            if value.is_none() {
                warn!(%field, "form has no control for field");
            }
            value.map(|value| (field, value))
        })
        .collect()
}
