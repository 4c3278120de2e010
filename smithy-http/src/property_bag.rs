/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Type-keyed storage that carries configuration alongside a request.
//!
//! Marshallers record what later stages need (region, signing scope, operation metadata) and
//! those stages read it back by type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

struct NamedType {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl NamedType {
    fn new<T: Send + Sync + 'static>(value: T) -> Self {
        NamedType {
            name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    fn into_value<T: 'static>(self) -> Option<T> {
        self.value.downcast().map(|boxed| *boxed).ok()
    }
}

/// A map holding at most one value of each type
#[derive(Default)]
pub struct PropertyBag {
    map: HashMap<TypeId, NamedType>,
}

impl PropertyBag {
    pub fn new() -> Self {
        PropertyBag::default()
    }

    /// Insert a value, returning the previous value of the same type
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), NamedType::new(value))
            .and_then(NamedType::into_value)
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_ref())
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.value.downcast_mut())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(NamedType::into_value)
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        f.debug_struct("PropertyBag").field("types", &names).finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[derive(Debug, PartialEq)]
    struct SigningName(&'static str);

    #[test]
    fn insert_get_remove() {
        let mut bag = PropertyBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.insert(SigningName("logs")), None);
        assert_eq!(bag.insert(5_u32), None);
        assert_eq!(bag.get::<SigningName>(), Some(&SigningName("logs")));
        assert_eq!(
            bag.insert(SigningName("access-analyzer")),
            Some(SigningName("logs"))
        );
        assert_eq!(bag.len(), 2);

        if let Some(count) = bag.get_mut::<u32>() {
            *count += 1;
        }
        assert_eq!(bag.get::<u32>(), Some(&6));

        assert_eq!(bag.remove::<u32>(), Some(6));
        assert!(!bag.contains::<u32>());
        assert!(bag.contains::<SigningName>());
        assert_eq!(bag.get::<String>(), None);
    }

    #[test]
    fn debug_lists_type_names() {
        let mut bag = PropertyBag::new();
        bag.insert(1_u8);
        assert_eq!(format!("{:?}", bag), "PropertyBag { types: [\"u8\"] }");
    }
}
