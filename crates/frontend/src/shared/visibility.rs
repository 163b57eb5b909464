//! Open/closed flags of a page's add, edit and delete dialogs

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit,
    Delete,
}

#[derive(Clone, Copy)]
pub struct Visibility {
    add: RwSignal<bool>,
    edit: RwSignal<bool>,
    delete: RwSignal<bool>,
}

impl Visibility {
    pub fn new() -> Self {
        Self {
            add: RwSignal::new(false),
            edit: RwSignal::new(false),
            delete: RwSignal::new(false),
        }
    }

    /// Signal backing one flag; thaw `Dialog` binds to it directly
    pub fn signal(&self, kind: DialogKind) -> RwSignal<bool> {
        match kind {
            DialogKind::Add => self.add,
            DialogKind::Edit => self.edit,
            DialogKind::Delete => self.delete,
        }
    }

    /// Opening one dialog leaves the others as they are
    pub fn open(&self, kind: DialogKind) {
        self.signal(kind).set(true);
    }

    pub fn close(&self, kind: DialogKind) {
        self.signal(kind).set(false);
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.signal(kind).get()
    }

    pub fn close_all(&self) {
        self.add.set(false);
        self.edit.set(false);
        self.delete.set(false);
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_visibility() -> Visibility {
    Visibility::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let owner = Owner::new();
        owner.set();

        let v = use_visibility();
        assert!(!v.is_open(DialogKind::Add));

        v.open(DialogKind::Add);
        v.open(DialogKind::Delete);
        assert!(v.is_open(DialogKind::Add));
        assert!(!v.is_open(DialogKind::Edit));
        assert!(v.is_open(DialogKind::Delete));

        v.close(DialogKind::Add);
        assert!(!v.is_open(DialogKind::Add));
        assert!(v.is_open(DialogKind::Delete));
    }

    #[test]
    fn close_all_resets_every_flag() {
        let owner = Owner::new();
        owner.set();

        let v = Visibility::default();
        v.open(DialogKind::Add);
        v.open(DialogKind::Edit);
        v.open(DialogKind::Delete);
        v.close_all();

        assert!(!v.signal(DialogKind::Add).get_untracked());
        assert!(!v.signal(DialogKind::Edit).get_untracked());
        assert!(!v.signal(DialogKind::Delete).get_untracked());
    }
}
