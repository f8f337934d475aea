//! Markdown class reference.
//!
//! Output layout:
//!
//! ```text
//! # <title>
//!
//! ## Contents
//!
//! - [Animal](#animal)
//! - [Dog](#dog)
//!
//! ## Dog
//!
//! Inheritance: [Dog](#dog) > [Animal](#animal)
//!
//! <class description>
//!
//! ### Fields
//!
//! #### Dog.name
//!
//! ### Methods
//!
//! #### Dog(name)
//!
//! #### Dog:bark()
//! ```

use std::fmt;

use log::{debug, info, trace};

use classdoc_core::{
    class::Class,
    document::Document,
    member::{Category, Member},
};

use crate::{
    config::RenderConfig,
    export::Exporter,
    resolve::Resolver,
    sort::{is_constructor, ordered_classes, sorted_members},
};

/// Link target for a heading: lowercased, with `. , : ( )` removed and
/// spaces replaced by hyphens, prefixed with `#`.
pub fn anchor(heading: &str) -> String {
    let mut target = String::with_capacity(heading.len() + 1);
    target.push('#');
    for c in heading.chars().flat_map(char::to_lowercase) {
        match c {
            '.' | ',' | ':' | '(' | ')' => {}
            ' ' => target.push('-'),
            c => target.push(c),
        }
    }
    target
}

/// Heading text of a member.
///
/// Fields render as `Class.field`. Methods render as
/// `Class<accessor>name(a, b)`, except the constructor, which renders as
/// `Class(a, b)`.
pub fn member_heading(member: &Member, constructor: &str) -> String {
    let Some(accessor) = member.accessor() else {
        return format!("{}.{}", member.owner(), member.name());
    };

    let params = member.params().join(", ");
    if is_constructor(member, constructor) {
        format!("{}({params})", member.owner())
    } else {
        format!("{}{accessor}{}({params})", member.owner(), member.name())
    }
}

/// Markdown [`Exporter`].
#[derive(Debug, Clone, Copy)]
pub struct MarkdownExporter<'a> {
    config: &'a RenderConfig,
}

impl<'a> MarkdownExporter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    fn category_label(&self, category: Category) -> &str {
        match category {
            Category::Field => self.config.fields_label(),
            Category::Method => self.config.methods_label(),
        }
    }

    fn write_link(out: &mut dyn fmt::Write, heading: &str) -> fmt::Result {
        write!(out, "[{heading}]({})", anchor(heading))
    }

    fn write_contents(out: &mut dyn fmt::Write, classes: &[&Class]) -> fmt::Result {
        writeln!(out, "## Contents")?;
        writeln!(out)?;
        for class in classes {
            write!(out, "- ")?;
            Self::write_link(out, class.name())?;
            writeln!(out)?;
        }
        if !classes.is_empty() {
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_hierarchy(
        out: &mut dyn fmt::Write,
        resolver: &Resolver<'_>,
        class: &Class,
    ) -> fmt::Result {
        write!(out, "Inheritance: ")?;
        for (index, link) in resolver.hierarchy(class).into_iter().enumerate() {
            if index > 0 {
                write!(out, " > ")?;
            }
            Self::write_link(out, link.name())?;
        }
        writeln!(out)?;
        writeln!(out)
    }

    fn write_class(
        &self,
        out: &mut dyn fmt::Write,
        resolver: &Resolver<'_>,
        class: &Class,
    ) -> fmt::Result {
        writeln!(out, "## {}", class.name())?;
        writeln!(out)?;

        if class.super_name().is_some() {
            Self::write_hierarchy(out, resolver, class)?;
        }
        if let Some(description) = class.description() {
            writeln!(out, "{description}")?;
            writeln!(out)?;
        }

        let constructor = self.config.constructor();
        // Category heading of the previous rendered member
        let mut current: Option<Category> = None;

        for member in sorted_members(class, constructor) {
            if resolver.is_suppressed(member) {
                debug!(
                    class = class.name(),
                    member = member.name(),
                    category:% = member.category();
                    "Suppressed undocumented override"
                );
                continue;
            }

            let category = member.category();
            if current != Some(category) {
                current = Some(category);
                writeln!(out, "### {}", self.category_label(category))?;
                writeln!(out)?;
            }

            writeln!(out, "#### {}", member_heading(member, constructor))?;
            writeln!(out)?;
            if let Some(description) = resolver.description(member) {
                writeln!(out, "{description}")?;
                writeln!(out)?;
            }
        }

        trace!(class = class.name(); "Rendered class");
        Ok(())
    }
}

impl Exporter for MarkdownExporter<'_> {
    fn export(&self, document: &Document, title: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        let classes = ordered_classes(document, self.config.class_order());
        info!(classes = classes.len(), order:? = self.config.class_order(); "Rendering Markdown");

        writeln!(out, "# {title}")?;
        writeln!(out)?;
        Self::write_contents(out, &classes)?;

        let resolver = Resolver::new(document, self.config);
        for class in classes {
            self.write_class(out, &resolver, class)?;
        }
        Ok(())
    }
}
