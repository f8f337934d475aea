//! Render-time queries over a fully parsed [`Document`].
//!
//! Every lookup here walks the ancestor chain by name through the document,
//! so superclasses declared after their subclasses (or in later files)
//! resolve correctly once parsing has finished.

use log::warn;

use classdoc_core::{
    class::Class,
    document::{ChainEnd, Document},
    member::Member,
};

use crate::config::RenderConfig;

/// Resolves inherited descriptions, override suppression and hierarchies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'a> {
    document: &'a Document,
    config: &'a RenderConfig,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(document: &'a Document, config: &'a RenderConfig) -> Self {
        Self { document, config }
    }

    /// Members with the same name as `member` on the ancestors of its owner,
    /// nearest first. Category is not compared.
    fn ancestor_members(&self, member: &'a Member) -> impl Iterator<Item = &'a Member> + 'a {
        let document = self.document;
        let name = member.name();
        document
            .class(member.owner())
            .into_iter()
            .flat_map(move |owner| document.ancestors(owner))
            .filter_map(move |ancestor| ancestor.member(name))
    }

    /// The member's own description, or the first one found on a same-named
    /// member of an ancestor.
    pub(crate) fn description(&self, member: &'a Member) -> Option<&'a str> {
        member
            .description()
            .or_else(|| self.ancestor_members(member).find_map(Member::description))
    }

    /// Returns `true` if `member` is an undocumented override that should be
    /// left out of the output.
    pub(crate) fn is_suppressed(&self, member: &'a Member) -> bool {
        !self.config.show_undocumented_overrides()
            && member.name() != self.config.constructor()
            && member.description().is_none()
            && self.ancestor_members(member).next().is_some()
    }

    /// `class` followed by each resolved ancestor, nearest first.
    ///
    /// The chain stops at the last class that could be resolved; a missing
    /// superclass or a cycle is logged.
    pub(crate) fn hierarchy(&self, class: &'a Class) -> Vec<&'a Class> {
        let mut ancestors = self.document.ancestors(class);
        let chain: Vec<_> = std::iter::once(class).chain(ancestors.by_ref()).collect();

        match ancestors.end() {
            Some(ChainEnd::Unresolved(name)) => {
                warn!(class = class.name(), super_name = name; "Superclass is not declared");
            }
            Some(ChainEnd::Cycle(name)) => {
                warn!(class = class.name(), repeated = name; "Inheritance cycle");
            }
            Some(ChainEnd::Root) | None => {}
        }

        chain
    }
}

#[cfg(test)]
mod tests {
    use classdoc_core::member::Accessor;

    use super::*;

    fn method(owner: &str, name: &str, description: Option<&str>) -> Member {
        Member::method(
            owner,
            name,
            description.map(str::to_string),
            Accessor::Instance,
            Vec::new(),
        )
    }

    /// Animal <- Dog <- Puppy, with Puppy declared first.
    fn kennel() -> Document {
        let mut document = Document::new();
        document.declare(Class::subclass("Puppy", None, "Dog"));
        document.declare(Class::subclass("Dog", None, "Animal"));
        document.declare(Class::root("Animal", Some("Base animal.".to_string())));

        for member in [
            method("Animal", "init", Some("Create an animal.")),
            method("Animal", "speak", Some("Make a sound.")),
            method("Animal", "sleep", None),
            method("Dog", "speak", None),
            method("Dog", "init", None),
            method("Puppy", "speak", None),
            method("Puppy", "sleep", Some("Nap often.")),
            method("Puppy", "bark", None),
        ] {
            document.add_member(member).expect("owner declared");
        }
        document
    }

    fn find<'a>(document: &'a Document, class: &str, name: &str) -> &'a Member {
        document.class(class).unwrap().member(name).unwrap()
    }

    #[test]
    fn test_description_inherits_through_chain() {
        let document = kennel();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        assert_eq!(
            resolver.description(find(&document, "Puppy", "speak")),
            Some("Make a sound.")
        );
        assert_eq!(
            resolver.description(find(&document, "Puppy", "sleep")),
            Some("Nap often.")
        );
        assert_eq!(resolver.description(find(&document, "Puppy", "bark")), None);
        assert_eq!(resolver.description(find(&document, "Animal", "sleep")), None);
    }

    #[test]
    fn test_undocumented_override_is_suppressed() {
        let document = kennel();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        assert!(resolver.is_suppressed(find(&document, "Dog", "speak")));
        assert!(resolver.is_suppressed(find(&document, "Puppy", "speak")));
    }

    #[test]
    fn test_override_of_undocumented_member_is_suppressed() {
        let mut document = kennel();
        document
            .add_member(method("Dog", "sleep", None))
            .expect("Dog declared");
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        assert!(resolver.is_suppressed(find(&document, "Dog", "sleep")));
    }

    #[test]
    fn test_documented_or_new_members_are_kept() {
        let document = kennel();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        assert!(!resolver.is_suppressed(find(&document, "Puppy", "sleep")));
        assert!(!resolver.is_suppressed(find(&document, "Puppy", "bark")));
        assert!(!resolver.is_suppressed(find(&document, "Animal", "sleep")));
    }

    #[test]
    fn test_constructor_is_never_suppressed() {
        let document = kennel();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        assert!(!resolver.is_suppressed(find(&document, "Dog", "init")));

        let config = RenderConfig::default().with_constructor("new");
        let resolver = Resolver::new(&document, &config);
        assert!(resolver.is_suppressed(find(&document, "Dog", "init")));
    }

    #[test]
    fn test_policy_flag_disables_suppression() {
        let document = kennel();
        let config = RenderConfig::default().with_show_undocumented_overrides(true);
        let resolver = Resolver::new(&document, &config);

        assert!(!resolver.is_suppressed(find(&document, "Dog", "speak")));
    }

    #[test]
    fn test_suppression_ignores_category() {
        let mut document = Document::new();
        document.declare(Class::root("Base", None));
        document.declare(Class::subclass("Derived", None, "Base"));
        document
            .add_member(Member::field("Base", "size", Some("Size.".to_string())))
            .unwrap();
        document
            .add_member(method("Derived", "size", None))
            .unwrap();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        let size = find(&document, "Derived", "size");
        assert!(resolver.is_suppressed(size));
        assert_eq!(resolver.description(size), Some("Size."));
    }

    #[test]
    fn test_hierarchy_with_forward_reference() {
        let document = kennel();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        let names: Vec<_> = resolver
            .hierarchy(document.class("Puppy").unwrap())
            .into_iter()
            .map(Class::name)
            .collect();
        assert_eq!(names, ["Puppy", "Dog", "Animal"]);
    }

    #[test]
    fn test_hierarchy_stops_at_unresolved_superclass() {
        let mut document = Document::new();
        document.declare(Class::subclass("Button", None, "Widget"));
        document.declare(Class::subclass("Widget", None, "Missing"));
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        let names: Vec<_> = resolver
            .hierarchy(document.class("Button").unwrap())
            .into_iter()
            .map(Class::name)
            .collect();
        assert_eq!(names, ["Button", "Widget"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut document = Document::new();
        document.declare(Class::subclass("A", None, "B"));
        document.declare(Class::subclass("B", None, "A"));
        document.add_member(method("A", "run", None)).unwrap();
        let config = RenderConfig::default();
        let resolver = Resolver::new(&document, &config);

        let run = find(&document, "A", "run");
        assert!(!resolver.is_suppressed(run));
        assert_eq!(resolver.description(run), None);
        assert_eq!(resolver.hierarchy(document.class("A").unwrap()).len(), 2);
    }
}
