use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::shared::validation::FieldErrors;

/// Server-assigned record identifier, unique within one collection.
///
/// A draft has no identifier; a record carries one from the moment the
/// server returns it and it never changes afterwards.
pub type EntityId = i64;

/// Descriptor every shop entity implements.
///
/// This is the single parameterization point of the generic CRUD layer:
/// the REST collection it lives under, its UI names, how to read its id,
/// how to turn a persisted record back into an editable draft, and the
/// validation schema for that draft.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// In-progress, not-yet-persisted field values bound to the form.
    ///
    /// `Default` must produce the type-appropriate empty draft: `""` for
    /// strings, `0` for numbers, `[]` for line-item arrays.
    type Draft: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static;

    /// REST collection segment, plural (e.g. "categories")
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Category")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Categories")
    fn list_name() -> &'static str;

    fn id(&self) -> EntityId;

    /// Copy every editable field of the record into a fresh draft.
    fn to_draft(&self) -> Self::Draft;

    /// Run the entity's declarative schema over a draft.
    ///
    /// An empty result means the draft may be submitted; any entry blocks
    /// submission entirely.
    fn validate(draft: &Self::Draft) -> FieldErrors;
}
