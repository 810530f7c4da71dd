//! Name-indexed table shared by categories and ingredients

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::domain::entities::NamedEntity;
use crate::domain::ports::{NameClaim, Rename};
use crate::domain::value_objects::NormalizedName;

pub(super) struct NamedTable<E: NamedEntity> {
    rows: IndexMap<E::Id, E>,
    by_name: HashMap<NormalizedName, E::Id>,
}

impl<E: NamedEntity> Default for NamedTable<E> {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<E: NamedEntity> NamedTable<E> {
    pub(super) fn all(&self) -> Vec<E> {
        self.rows.values().cloned().collect()
    }

    pub(super) fn get(&self, id: &E::Id) -> Option<E> {
        self.rows.get(id).cloned()
    }

    pub(super) fn contains(&self, id: &E::Id) -> bool {
        self.rows.contains_key(id)
    }

    pub(super) fn find(&self, name: &NormalizedName) -> Option<E> {
        self.by_name
            .get(name)
            .and_then(|id| self.rows.get(id))
            .cloned()
    }

    pub(super) fn claim(&mut self, record: E) -> NameClaim<E> {
        let key = record.normalized_name();
        if let Some(existing) = self.find(&key) {
            return NameClaim::Taken(existing);
        }
        self.by_name.insert(key, record.id());
        self.rows.insert(record.id(), record.clone());
        NameClaim::Inserted(record)
    }

    pub(super) fn rename(&mut self, id: &E::Id, name: String) -> Rename<E> {
        if !self.rows.contains_key(id) {
            return Rename::Missing;
        }
        let new_key = NormalizedName::new(&name);
        match self.by_name.get(&new_key) {
            Some(owner) if owner != id => {
                return match self.rows.get(owner) {
                    Some(existing) => Rename::Taken(existing.clone()),
                    None => Rename::Missing,
                };
            }
            _ => {}
        }

        let Some(row) = self.rows.get_mut(id) else {
            return Rename::Missing;
        };
        self.by_name.remove(&row.normalized_name());
        row.set_name(name);
        self.by_name.insert(new_key, *id);
        Rename::Renamed(row.clone())
    }

    pub(super) fn remove(&mut self, id: &E::Id) -> Option<E> {
        let removed = self.rows.shift_remove(id)?;
        self.by_name.remove(&removed.normalized_name());
        Some(removed)
    }
}
