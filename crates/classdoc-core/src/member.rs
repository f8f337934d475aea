//! Members owned by a documented class.
//!
//! A [`Member`] is either a field or a method. Methods additionally record
//! how they are accessed ([`Accessor`]) and their ordered parameter names.

use std::fmt;

/// Rendering category of a member.
///
/// The derived ordering places fields before methods, which is the order
/// categories appear in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Field,
    Method,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Field => write!(f, "field"),
            Category::Method => write!(f, "method"),
        }
    }
}

/// Separator used between the class name and the method name.
///
/// # Variants
///
/// - `Instance` - `Class:method`, the method receives an implicit `self`
/// - `Table` - `Class.method`, a plain function stored on the class table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    Instance,
    Table,
}

impl Accessor {
    /// Returns the accessor for a separator character, if it is one.
    pub fn from_separator(separator: char) -> Option<Self> {
        match separator {
            ':' => Some(Self::Instance),
            '.' => Some(Self::Table),
            _ => None,
        }
    }

    /// Returns the separator as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessor::Instance => ":",
            Accessor::Table => ".",
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific member data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    /// A static table field or a `self` field.
    Field,
    /// A method declared with `function Class<sep>name(params)`.
    Method {
        accessor: Accessor,
        params: Vec<String>,
    },
}

/// A field or method belonging to exactly one class.
///
/// The owning class is recorded by name; the member itself is stored in
/// that class's member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    description: Option<String>,
    owner: String,
    kind: MemberKind,
}

impl Member {
    /// Create a field member.
    pub fn field(
        owner: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            owner: owner.into(),
            kind: MemberKind::Field,
        }
    }

    /// Create a method member.
    ///
    /// # Arguments
    ///
    /// * `owner` - Name of the owning class
    /// * `name` - Method name
    /// * `description` - Comment block attached to the declaration
    /// * `accessor` - Separator used in the declaration
    /// * `params` - Parameter names in declaration order
    pub fn method(
        owner: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        accessor: Accessor,
        params: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            owner: owner.into(),
            kind: MemberKind::Method { accessor, params },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member's own description, without inheritance.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Name of the owning class.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn kind(&self) -> &MemberKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        match self.kind {
            MemberKind::Field => Category::Field,
            MemberKind::Method { .. } => Category::Method,
        }
    }

    pub fn is_method(&self) -> bool {
        self.category() == Category::Method
    }

    /// Returns the accessor for methods, `None` for fields.
    pub fn accessor(&self) -> Option<Accessor> {
        match &self.kind {
            MemberKind::Field => None,
            MemberKind::Method { accessor, .. } => Some(*accessor),
        }
    }

    /// Returns the parameter names for methods; fields have none.
    pub fn params(&self) -> &[String] {
        match &self.kind {
            MemberKind::Field => &[],
            MemberKind::Method { params, .. } => params,
        }
    }
}
