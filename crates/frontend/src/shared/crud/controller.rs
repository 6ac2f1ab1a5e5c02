use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::collection;
use super::form::FormState;
use crate::shared::api_client::ApiClient;
use crate::shared::toast::ToastService;

/// Owns one entity screen: the collection cache, the form and its
/// visibility.
///
/// All four operations are fire-and-forget: the page stays interactive
/// while a request is in flight, nothing is cancellable, and no lock
/// prevents a second submit racing the first. The collection signal is
/// only ever mutated from this controller.
pub struct PageController<E: Entity> {
    pub items: RwSignal<Vec<E>>,
    pub form: RwSignal<FormState<E>>,
    pub form_open: RwSignal<bool>,
    api: ApiClient,
    toasts: ToastService,
}

impl<E: Entity> Clone for PageController<E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            form: self.form,
            form_open: self.form_open,
            api: self.api.clone(),
            toasts: self.toasts,
        }
    }
}

impl<E: Entity> PageController<E> {
    pub fn new(api: ApiClient, toasts: ToastService) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            form: RwSignal::new(FormState::new()),
            form_open: RwSignal::new(false),
            api,
            toasts,
        }
    }

    /// Fetch the whole collection and overwrite the local cache. A failure
    /// is logged and leaves whatever was cached before in place; nothing is
    /// surfaced to the user and nothing retries.
    pub fn load(&self) {
        let api = self.api.clone();
        let items = self.items;
        spawn_local(async move {
            match api.fetch_collection::<E>(E::collection_name()).await {
                Ok(records) => items.set(records),
                Err(err) => log::error!("failed to load {}: {}", E::collection_name(), err),
            }
        });
    }

    pub fn open_create(&self) {
        self.form.update(|form| form.reset());
        self.form_open.set(true);
    }

    pub fn open_edit(&self, record: &E) {
        self.form.update(|form| form.populate(record));
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form.update(|form| form.reset());
        self.form_open.set(false);
    }

    /// Validate, then dispatch as create or update depending on the held
    /// identifier. An invalid draft never reaches the network; a failed
    /// request keeps the form open with the user's input intact.
    pub fn submit(&self) {
        self.form.update(|form| {
            form.validate();
        });
        if self.form.with_untracked(|form| !form.errors.is_empty()) {
            // per-field messages are already showing; nothing goes out
            return;
        }

        let draft = self.form.with_untracked(|form| form.draft.clone());
        let selected = self.form.with_untracked(|form| form.selected_id());
        let this = self.clone();
        spawn_local(async move {
            let outcome = match selected {
                Some(id) => this
                    .api
                    .update::<E::Draft, E>(E::collection_name(), id, &draft)
                    .await
                    .map(|updated| {
                        this.items
                            .update(|items| collection::replace_updated(items, updated))
                    }),
                None => this
                    .api
                    .create::<E::Draft, E>(E::collection_name(), &draft)
                    .await
                    .map(|created| {
                        this.items
                            .update(|items| collection::append_created(items, created))
                    }),
            };

            match outcome {
                Ok(()) => {
                    let verb = if selected.is_some() { "updated" } else { "created" };
                    this.toasts
                        .success(format!("{} {}", E::element_name(), verb));
                    this.form.update(|form| form.reset());
                    this.form_open.set(false);
                }
                Err(err) => this.toasts.error(err.user_message()),
            }
        });
    }

    /// Delete by id; the entry leaves the cache only on a confirmed 204.
    pub fn delete(&self, id: EntityId) {
        let this = self.clone();
        spawn_local(async move {
            match this.api.delete(E::collection_name(), id).await {
                Ok(()) => {
                    this.items
                        .update(|items| collection::remove_deleted(items, id));
                    this.toasts
                        .success(format!("{} deleted", E::element_name()));
                }
                Err(err) => this.toasts.error(err.user_message()),
            }
        });
    }
}
