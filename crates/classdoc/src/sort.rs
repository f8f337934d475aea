//! Member ordering for rendering.

use std::cmp::Ordering;

use classdoc_core::{class::Class, document::Document, member::Member};

use crate::config::ClassOrder;

/// The classes of `document` in the configured order.
pub(crate) fn ordered_classes(document: &Document, order: ClassOrder) -> Vec<&Class> {
    match order {
        ClassOrder::Alphabetical => document.classes_by_name(),
        ClassOrder::Declaration => document.classes().collect(),
    }
}

/// Returns `true` if `member` is a method named `constructor`.
pub(crate) fn is_constructor(member: &Member, constructor: &str) -> bool {
    member.is_method() && member.name() == constructor
}

/// Compare two members for rendering: fields before methods, then the
/// constructor, then by name (case-sensitive).
fn compare(a: &Member, b: &Member, constructor: &str) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| {
            // `true` sorts after `false`, so negate to put the constructor first
            let a_ctor = !is_constructor(a, constructor);
            let b_ctor = !is_constructor(b, constructor);
            a_ctor.cmp(&b_ctor)
        })
        .then_with(|| a.name().cmp(b.name()))
}

/// The members of `class` in rendering order.
///
/// The sort is stable, so members with identical keys (such as repeated
/// static field assignments) keep their parse order.
pub(crate) fn sorted_members<'a>(class: &'a Class, constructor: &str) -> Vec<&'a Member> {
    let mut members: Vec<_> = class.members().iter().collect();
    members.sort_by(|a, b| compare(a, b, constructor));
    members
}
