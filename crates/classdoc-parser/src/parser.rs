//! Declaration parser.
//!
//! A single forward pass over the lines of one source file. Every line is
//! classified (see [`classify`](crate::classify)) and drives one transition
//! of a two-state machine: comment lines move it into (or keep it in)
//! `Collecting`; any other line returns it to `Idle`, handing the collected
//! block to the declaration on that line, if there is one.

use std::{collections::HashMap, mem};

use log::{debug, trace};

use classdoc_core::{
    class::Class,
    document::{Declaration, Document},
    member::Member,
};

use crate::{
    classify::{Line, MethodDecl, classify},
    comment::CommentBlock,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Parser options.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    subclass_method: String,
}

impl ParseConfig {
    /// Create a parser configuration.
    ///
    /// # Arguments
    ///
    /// * `subclass_method` - Operation name recognised in `local B = A:<name>(...)`
    pub fn new(subclass_method: impl Into<String>) -> Self {
        Self {
            subclass_method: subclass_method.into(),
        }
    }

    pub fn subclass_method(&self) -> &str {
        &self.subclass_method
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new("subclass")
    }
}

/// One line of source with its position.
#[derive(Debug, Clone, Copy)]
struct SourceLine<'s> {
    number: usize,
    text: &'s str,
    span: Span,
}

impl SourceLine<'_> {
    /// Span of `part`, a slice of this line's text.
    fn span_of(&self, part: &str) -> Span {
        self.span.slice_of(self.text, part)
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split source into lines, without terminators, with byte spans.
///
/// A leading byte order mark is skipped; spans stay relative to `source`.
fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let skipped = source
        .strip_prefix(BYTE_ORDER_MARK)
        .map_or(0, |_| BYTE_ORDER_MARK.len_utf8());

    source[skipped..]
        .split_inclusive('\n')
        .scan(skipped, |offset, raw| {
            let start = *offset;
            *offset += raw.len();
            Some((start, raw))
        })
        .enumerate()
        .map(|(index, (start, raw))| {
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            let text = text.strip_suffix('\r').unwrap_or(text);
            SourceLine {
                number: index + 1,
                text,
                span: Span::new(start..start + text.len()),
            }
        })
}

/// Pending comment state between declarations.
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Collecting(CommentBlock),
}

impl State {
    fn push_comment(&mut self, text: &str) {
        match self {
            State::Idle => {
                let mut block = CommentBlock::new();
                block.push(text);
                *self = State::Collecting(block);
            }
            State::Collecting(block) => block.push(text),
        }
    }

    /// Return to `Idle`, yielding the joined block as a description.
    fn take_description(&mut self) -> Option<String> {
        match mem::take(self) {
            State::Idle => None,
            State::Collecting(block) => block.into_description(),
        }
    }

    /// Return to `Idle`, discarding any collected block.
    fn clear(&mut self) {
        if let State::Collecting(block) = mem::take(self) {
            trace!(lines = block.len(); "Discarded comment block");
        }
    }
}

/// Parses one source file into a [`Document`].
pub(crate) struct Parser<'d, 'c> {
    document: &'d mut Document,
    config: &'c ParseConfig,
    state: State,
    /// Owner class of the most recently parsed method, for `self` fields.
    method_owner: Option<String>,
    /// Declaration spans of classes declared in this file.
    declared: HashMap<String, Span>,
    diagnostics: DiagnosticCollector,
}

impl<'d, 'c> Parser<'d, 'c> {
    pub(crate) fn new(document: &'d mut Document, config: &'c ParseConfig) -> Self {
        Self {
            document,
            config,
            state: State::Idle,
            method_owner: None,
            declared: HashMap::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Parse `source`, adding its declarations to the document.
    ///
    /// Returns the warnings reported for the file, or a [`ParseError`] if any
    /// declaration referred to an undefined class.
    pub(crate) fn parse(mut self, source: &str) -> Result<Vec<Diagnostic>, ParseError> {
        for line in source_lines(source) {
            self.step(line);
        }
        self.diagnostics.finish()
    }

    fn step(&mut self, line: SourceLine<'_>) {
        match classify(line.text, self.config.subclass_method()) {
            Line::Comment(text) => self.state.push_comment(text),
            Line::BaseClass { name } => {
                let description = self.state.take_description();
                self.declare_class(Class::root(name, description), line, name);
            }
            Line::Subclass { name, super_name } => {
                let description = self.state.take_description();
                self.declare_class(Class::subclass(name, description, super_name), line, name);
            }
            Line::StaticField { class, field } => self.static_field(class, field, line),
            Line::SelfField { field } => self.self_field(field, line),
            Line::Method(decl) => self.method(decl, line),
            Line::Other => self.state.clear(),
        }
    }

    fn declare_class(&mut self, class: Class, line: SourceLine<'_>, name: &str) {
        let span = line.span_of(name);
        debug!(
            class = name,
            super_name:? = class.super_name(),
            line = line.number;
            "Class declaration"
        );

        if self.document.declare(class) == Declaration::Redeclared {
            let mut diag = Diagnostic::from_code(
                ErrorCode::W200,
                format!("class `{name}` is declared more than once"),
            )
            .with_label(span, "redeclared here");
            if let Some(first) = self.declared.get(name) {
                diag = diag.with_secondary_label(*first, "first declared here");
            }
            self.diagnostics.emit(diag.with_help(
                "the later declaration replaces the superclass and, if commented, the description",
            ));
        }
        self.declared.entry(name.to_string()).or_insert(span);
    }

    fn static_field(&mut self, class: &str, field: &str, line: SourceLine<'_>) {
        let description = self.state.take_description();
        let member = Member::field(class, field, description);

        if self.document.add_member(member).is_err() {
            self.diagnostics.emit(
                Diagnostic::from_code(ErrorCode::E100, format!("undefined class `{class}`"))
                    .with_label(line.span_of(class), "field assigned on an undefined class")
                    .with_help(format!(
                        "declare `local {class} = {{}}` before assigning its fields"
                    )),
            );
            return;
        }
        trace!(class, field, line = line.number; "Static field");
    }

    fn self_field(&mut self, field: &str, line: SourceLine<'_>) {
        let Some(class) = self
            .method_owner
            .as_deref()
            .and_then(|owner| self.document.class_mut(owner))
        else {
            self.state.clear();
            self.diagnostics.emit(
                Diagnostic::from_code(
                    ErrorCode::W201,
                    format!("`self.{field}` is assigned outside of any method"),
                )
                .with_label(line.span_of(field), "no enclosing method")
                .with_help("self fields are attributed to the most recently declared method"),
            );
            return;
        };

        if class.has_member(field) {
            self.state.clear();
            return;
        }

        let description = self.state.take_description();
        trace!(class = class.name(), field, line = line.number; "Self field");
        let member = Member::field(class.name(), field, description);
        class.push_member(member);
    }

    fn method(&mut self, decl: MethodDecl<'_>, line: SourceLine<'_>) {
        let description = self.state.take_description();
        let params = decl.params.iter().map(|param| param.to_string()).collect();
        let member = Member::method(decl.class, decl.name, description, decl.accessor, params);

        if self.document.add_member(member).is_err() {
            self.method_owner = None;
            self.diagnostics.emit(
                Diagnostic::from_code(
                    ErrorCode::E101,
                    format!("undefined class `{}`", decl.class),
                )
                .with_label(line.span_of(decl.class), "method declared on an undefined class")
                .with_help(format!(
                    "declare `local {} = {{}}` before its methods",
                    decl.class
                )),
            );
            return;
        }

        trace!(class = decl.class, method = decl.name, line = line.number; "Method");
        self.method_owner = Some(decl.class.to_string());
    }
}
