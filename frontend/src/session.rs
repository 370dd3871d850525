//! The session's added-record store, shared by every screen.

use common::reconcile::{AddedRecordStore, RecordMirror};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Handle to the one [`AddedRecordStore`] of the running client.
///
/// Clones share the store. Two handles are equal when they point at the same
/// store, which is what Yew needs to compare properties.
#[derive(Clone, Default)]
pub struct SessionStore(Rc<RefCell<AddedRecordStore>>);

impl SessionStore {
    pub fn new(mirror: Option<Box<dyn RecordMirror>>) -> Self {
        let store = match mirror {
            Some(mirror) => AddedRecordStore::with_mirror(mirror),
            None => AddedRecordStore::new(),
        };
        Self(Rc::new(RefCell::new(store)))
    }

    pub fn borrow(&self) -> Ref<'_, AddedRecordStore> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, AddedRecordStore> {
        self.0.borrow_mut()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
