use super::descriptor::FieldDescriptor;

/// First non-empty annotation among `candidates`, else the field's own name.
///
/// Used with two independent candidate lists: one for the external input
/// key, one for the display title.
pub fn resolve<'a, S: AsRef<str>>(field: &'a FieldDescriptor, candidates: &[S]) -> &'a str {
    candidates
        .iter()
        .find_map(|key| field.annotation(key.as_ref()))
        .unwrap_or_else(|| field.name())
}
