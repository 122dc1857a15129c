//! Ordered collection that rejects identity-equal entries.

use core::borrow::Borrow;
use core::ops::Deref;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// An ordered list of entities in which no two elements share an identity.
///
/// Uniqueness is decided with [`Entity::is_same`], never with `==`: two entries
/// that differ only in non-identity fields still collide. Every mutation
/// validates before it touches the backing storage, so a failed call leaves
/// the list exactly as it was.
///
/// Equality between two lists compares their elements in order with full
/// value equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if some element has the same identity as `entity`.
    pub fn contains(&self, entity: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same(entity))
    }

    /// Appends `entity` to the end of the list.
    pub fn add(&mut self, entity: T) -> DomainResult<()> {
        if self.contains(&entity) {
            return Err(DomainError::duplicate(T::KIND));
        }
        self.items.push(entity);
        Ok(())
    }

    /// Replaces `target` with `replacement`, keeping its position.
    ///
    /// `replacement` may keep the target's identity (an in-place edit) or take
    /// a new one, as long as no other element already holds it.
    pub fn set(&mut self, target: &T, replacement: T) -> DomainResult<()> {
        let index = self
            .position(target)
            .ok_or_else(|| DomainError::not_found(T::KIND))?;

        // The target's own slot can never match a replacement with a different identity.
        if !target.is_same(&replacement) && self.contains(&replacement) {
            return Err(DomainError::duplicate(T::KIND));
        }

        self.items[index] = replacement;
        Ok(())
    }

    /// Removes the element with the same identity as `entity` and returns it.
    pub fn remove(&mut self, entity: &T) -> DomainResult<T> {
        let index = self
            .position(entity)
            .ok_or_else(|| DomainError::not_found(T::KIND))?;
        Ok(self.items.remove(index))
    }

    /// Replaces the whole contents with `items`.
    ///
    /// The input is scanned for identity collisions first; on failure the
    /// current contents are untouched.
    pub fn set_all(&mut self, items: Vec<T>) -> DomainResult<()> {
        if !all_unique(&items) {
            return Err(DomainError::duplicate(T::KIND));
        }
        self.items = items;
        Ok(())
    }

    /// Replaces the whole contents with a copy of `other`, which is unique already.
    pub fn set_all_from(&mut self, other: &UniqueList<T>)
    where
        T: Clone,
    {
        self.items.clone_from(&other.items);
    }

    /// Read-only projection over the live contents.
    pub fn as_view(&self) -> UniqueListView<'_, T> {
        UniqueListView { items: &self.items }
    }

    /// Looks up an element by identity key.
    ///
    /// `key` may be any borrowed form of the identity (e.g. `&str` for a name).
    pub fn get_by_identity<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Identity: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        find_by_identity(&self.items, key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn position(&self, entity: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.is_same(entity))
    }
}

impl<T: Entity> TryFrom<Vec<T>> for UniqueList<T> {
    type Error = DomainError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        list.set_all(items)?;
        Ok(list)
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Borrowed, read-only view of a [`UniqueList`].
///
/// The view only hands out shared references, so it has no way to add, replace
/// or remove entries. The borrow also keeps the owning list from being mutated
/// while the view is alive.
#[derive(Debug)]
pub struct UniqueListView<'a, T> {
    items: &'a [T],
}

impl<T> Clone for UniqueListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UniqueListView<'_, T> {}

impl<'a, T: Entity> UniqueListView<'a, T> {
    /// Same lookup as [`UniqueList::get_by_identity`], tied to the view's lifetime.
    pub fn get_by_identity<Q>(&self, key: &Q) -> Option<&'a T>
    where
        T::Identity: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        find_by_identity(self.items, key)
    }

    pub fn contains(&self, entity: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same(entity))
    }
}

impl<'a, T> UniqueListView<'a, T> {
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Deref for UniqueListView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.items
    }
}

impl<'a, T> IntoIterator for UniqueListView<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn find_by_identity<'a, T, Q>(items: &'a [T], key: &Q) -> Option<&'a T>
where
    T: Entity,
    T::Identity: Borrow<Q>,
    Q: Eq + ?Sized,
{
    items
        .iter()
        .find(|item| Borrow::<Q>::borrow(item.identity()) == key)
}

fn all_unique<T: Entity>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !a.is_same(b)))
}
