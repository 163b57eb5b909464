//! Local list mutators.
//!
//! They never talk to the server; they keep the in-memory mirror in the same
//! shape the server would return after a successful call, keyed by
//! [`Resource::key`].

use contracts::domain::common::Resource;

/// Append `item`, replacing an entry with the same key instead of duplicating it
pub fn add<R: Resource>(list: &mut Vec<R>, item: R) {
    let key = item.key();
    match list.iter().position(|existing| existing.key() == key) {
        Some(pos) => list[pos] = item,
        None => list.push(item),
    }
}

/// Replace the entry stored under `key` with `item`.
///
/// `item` may carry a different key (natural keys can be renamed); any other
/// entry already holding the new key is dropped so the list stays unique.
/// An unknown `key` appends.
pub fn update_in_list<R: Resource>(list: &mut Vec<R>, key: &str, item: R) {
    let new_key = item.key();
    if new_key != key {
        list.retain(|existing| existing.key() != new_key);
    }
    match list.iter().position(|existing| existing.key() == key) {
        Some(pos) => list[pos] = item,
        None => list.push(item),
    }
}

/// Drop every entry stored under `key`
pub fn remove_from_list<R: Resource>(list: &mut Vec<R>, key: &str) {
    list.retain(|existing| existing.key() != key);
}
