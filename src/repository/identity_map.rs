use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One shared instance per persisted row id.
///
/// Entries live until removed explicitly or the map is cleared; there is no
/// eviction.
pub struct IdentityMap<T> {
    entries: RefCell<HashMap<i64, Rc<RefCell<T>>>>,
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T> IdentityMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<Rc<RefCell<T>>> {
        self.entries.borrow().get(&id).cloned()
    }

    /// Register `instance` under `id`, replacing whatever was there.
    pub fn insert(&self, id: i64, instance: Rc<RefCell<T>>) {
        self.entries.borrow_mut().insert(id, instance);
    }

    pub fn remove(&self, id: i64) -> Option<Rc<RefCell<T>>> {
        self.entries.borrow_mut().remove(&id)
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    /// Return the cached instance for `id` after `refresh` has folded `row`
    /// into it, or cache `row` itself when the id has not been seen.
    pub fn reconcile<F>(&self, id: i64, row: T, refresh: F) -> Rc<RefCell<T>>
    where
        F: FnOnce(&mut T, T),
    {
        if let Some(cached) = self.get(id) {
            refresh(&mut *cached.borrow_mut(), row);
            return cached;
        }
        let instance = Rc::new(RefCell::new(row));
        self.insert(id, instance.clone());
        instance
    }
}
