//! The name-indexed class registry.
//!
//! A [`Document`] owns every [`Class`] parsed during a run, keyed by class
//! name. It is populated by the parser and then read by the renderer.
//! Superclass relationships are resolved on demand by name, so a subclass
//! can be registered before its superclass.
//!
//! # Example
//!
//! ```
//! use classdoc_core::{class::Class, document::Document};
//!
//! let mut document = Document::new();
//!
//! // The superclass may be registered after the subclass.
//! document.declare(Class::subclass("Dog", None, "Animal"));
//! document.declare(Class::root("Animal", Some("Base animal.".to_string())));
//!
//! let dog = document.class("Dog").unwrap();
//! let chain: Vec<_> = document.ancestors(dog).map(|class| class.name()).collect();
//! assert_eq!(chain, ["Animal"]);
//! ```

use std::collections::HashSet;

use indexmap::{IndexMap, map::Entry};
use log::debug;

use crate::{class::Class, member::Member};

/// Outcome of [`Document::declare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// The class name was not registered before.
    New,
    /// The class already existed and was updated in place.
    Redeclared,
}

/// Registry of all documented classes, keyed by name.
///
/// Iteration order is declaration order (the order in which names were
/// first registered).
#[derive(Debug, Clone, Default)]
pub struct Document {
    classes: IndexMap<String, Class>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class declaration.
    ///
    /// If the name is already registered, the existing record is updated:
    /// the superclass name is replaced, the description is replaced only if
    /// the new declaration carries one, and members are kept.
    pub fn declare(&mut self, class: Class) -> Declaration {
        match self.classes.entry(class.name().to_string()) {
            Entry::Vacant(entry) => {
                debug!(class = class.name(); "Declared class");
                entry.insert(class);
                Declaration::New
            }
            Entry::Occupied(mut entry) => {
                debug!(class = class.name(); "Redeclared class");
                entry.get_mut().redeclare(class);
                Declaration::Redeclared
            }
        }
    }

    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    /// Look up a class by name for modification.
    pub fn class_mut(&mut self, name: &str) -> Option<&mut Class> {
        self.classes.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Append a member to the class named by the member's owner.
    ///
    /// Returns the member back if the owner is not registered.
    pub fn add_member(&mut self, member: Member) -> Result<(), Member> {
        match self.classes.get_mut(member.owner()) {
            Some(class) => {
                class.push_member(member);
                Ok(())
            }
            None => Err(member),
        }
    }

    /// Iterate over classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Classes sorted by name (case-sensitive).
    pub fn classes_by_name(&self) -> Vec<&Class> {
        let mut classes: Vec<_> = self.classes.values().collect();
        classes.sort_by(|a, b| a.name().cmp(b.name()));
        classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Resolve the superclass of `class`, if it names a registered class.
    pub fn superclass(&self, class: &Class) -> Option<&Class> {
        class.super_name().and_then(|name| self.class(name))
    }

    /// Walk the ancestors of `class`, nearest first.
    ///
    /// The walk resolves each superclass name through this document and
    /// stops at a root class, at a name that is not registered, or when a
    /// class would be visited twice.
    pub fn ancestors<'a>(&'a self, class: &'a Class) -> Ancestors<'a> {
        Ancestors::new(self, class)
    }
}

/// Reason an ancestor walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainEnd<'a> {
    /// Reached a class without a superclass.
    Root,
    /// The superclass name is not registered in the document.
    Unresolved(&'a str),
    /// The superclass name was already visited.
    Cycle(&'a str),
}

/// Iterator over the ancestors of a class.
///
/// Created by [`Document::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<&'a str>,
    visited: HashSet<&'a str>,
    end: Option<ChainEnd<'a>>,
}

impl<'a> Ancestors<'a> {
    fn new(document: &'a Document, class: &'a Class) -> Self {
        let mut visited = HashSet::new();
        visited.insert(class.name());
        let end = if class.super_name().is_none() {
            Some(ChainEnd::Root)
        } else {
            None
        };

        Self {
            document,
            next: class.super_name(),
            visited,
            end,
        }
    }

    /// Why the walk ended, once the iterator is exhausted.
    pub fn end(&self) -> Option<ChainEnd<'a>> {
        self.end
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Class;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.next.take()?;

        if !self.visited.insert(name) {
            debug!(class = name; "Inheritance cycle detected");
            self.end = Some(ChainEnd::Cycle(name));
            return None;
        }

        let Some(class) = self.document.class(name) else {
            self.end = Some(ChainEnd::Unresolved(name));
            return None;
        };

        match class.super_name() {
            Some(super_name) => self.next = Some(super_name),
            None => self.end = Some(ChainEnd::Root),
        }

        Some(class)
    }
}
