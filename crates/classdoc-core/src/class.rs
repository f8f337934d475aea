//! Documented class records.

use crate::member::Member;

/// A named class with an optional superclass and its members.
///
/// The superclass is stored as a name rather than a reference: it may be
/// declared later in the same file or in another file, and is only resolved
/// through [`Document`](crate::document::Document) lookups once the whole
/// registry has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    description: Option<String>,
    super_name: Option<String>,
    members: Vec<Member>,
}

impl Class {
    /// Create a root class with no superclass.
    pub fn root(name: impl Into<String>, description: Option<String>) -> Self {
        Self::new(name, description, None)
    }

    /// Create a subclass of the class named `super_name`.
    ///
    /// The superclass does not need to exist yet.
    pub fn subclass(
        name: impl Into<String>,
        description: Option<String>,
        super_name: impl Into<String>,
    ) -> Self {
        Self::new(name, description, Some(super_name.into()))
    }

    fn new(
        name: impl Into<String>,
        description: Option<String>,
        super_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            super_name,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Name of the superclass, as written at the declaration site.
    pub fn super_name(&self) -> Option<&str> {
        self.super_name.as_deref()
    }

    /// Members in parse order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the first member with the given name, regardless of category.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name() == name)
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.member(name).is_some()
    }

    /// Append a member.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the member's owner is a different class.
    pub fn push_member(&mut self, member: Member) {
        debug_assert_eq!(member.owner(), self.name, "member added to foreign class");
        self.members.push(member);
    }

    /// Apply a repeated declaration of this class.
    ///
    /// A new description replaces the old one only when present; the
    /// superclass name is always replaced. Members are kept.
    pub(crate) fn redeclare(&mut self, declaration: Class) {
        if declaration.description.is_some() {
            self.description = declaration.description;
        }
        self.super_name = declaration.super_name;
    }
}
