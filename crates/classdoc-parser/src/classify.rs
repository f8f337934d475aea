//! Line classifier.
//!
//! Each source line is matched against the declaration patterns in a fixed
//! priority order; the first pattern that matches decides the [`Line`] kind.
//! Patterns match a prefix of the line, so trailing code such as a function
//! body on the same line is ignored.
//!
//! | Priority | Pattern                               | Anchoring  |
//! |----------|---------------------------------------|------------|
//! | 1        | `-- text`                             | indented   |
//! | 2        | `local Name = {}`                     | column 0   |
//! | 3        | `local Name = Super:subclass(...)`    | column 0   |
//! |          | `local Name = Super:subclass "..."`   |            |
//! |          | `local Name = Super:subclass {...}`   |            |
//! | 4        | `Name.field = ...`                    | column 0   |
//! | 5        | `self.field = ...`                    | indented   |
//! | 6        | `function Name:method(a, b)`          | column 0   |

use winnow::{
    Parser as _,
    ascii::{space0, space1},
    combinator::{alt, delimited, eof, not, opt, preceded, separated, terminated},
    error::ModalResult,
    token::{one_of, rest, take_while},
};

use classdoc_core::member::Accessor;

/// A method declaration recognised on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MethodDecl<'s> {
    pub class: &'s str,
    pub accessor: Accessor,
    pub name: &'s str,
    pub params: Vec<&'s str>,
}

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'s> {
    /// Comment text, marker stripped and trimmed.
    Comment(&'s str),
    /// `local Name = {}`
    BaseClass { name: &'s str },
    /// `local Name = Super:subclass(...)`
    Subclass { name: &'s str, super_name: &'s str },
    /// `Class.field = ...`
    StaticField { class: &'s str, field: &'s str },
    /// `self.field = ...`
    SelfField { field: &'s str },
    /// `function Class:method(params)`
    Method(MethodDecl<'s>),
    /// Blank lines and anything else.
    Other,
}

/// Classify one line of source text.
///
/// `subclass_method` is the name of the operation that creates a subclass,
/// as in `local Dog = Animal:subclass()`.
pub(crate) fn classify<'s>(line: &'s str, subclass_method: &str) -> Line<'s> {
    if let Some(text) = attempt(line, comment) {
        return Line::Comment(text);
    }
    if let Some(name) = attempt(line, base_class) {
        return Line::BaseClass { name };
    }
    if let Some((name, super_name)) =
        attempt(line, |input: &mut &'s str| subclass(input, subclass_method))
    {
        return Line::Subclass { name, super_name };
    }
    if let Some((class, field)) = attempt(line, static_field) {
        return Line::StaticField { class, field };
    }
    if let Some(field) = attempt(line, self_field) {
        return Line::SelfField { field };
    }
    if let Some(method) = attempt(line, method) {
        return Line::Method(method);
    }
    Line::Other
}

/// Run `parser` on a fresh view of `line`.
fn attempt<'s, O>(
    line: &'s str,
    mut parser: impl FnMut(&mut &'s str) -> ModalResult<O>,
) -> Option<O> {
    let mut input = line;
    parser(&mut input).ok()
}

/// Identifier: a letter or underscore followed by letters, digits or underscores.
fn identifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// `=` surrounded by optional spaces, but not `==`.
fn assignment(input: &mut &str) -> ModalResult<()> {
    (space0, '=', not('='), space0).void().parse_next(input)
}

/// `:` or `.` between a class name and a member name.
fn accessor(input: &mut &str) -> ModalResult<Accessor> {
    one_of([':', '.'])
        .verify_map(Accessor::from_separator)
        .parse_next(input)
}

/// Optional `;`, optional trailing comment, then end of line.
fn line_end(input: &mut &str) -> ModalResult<()> {
    (space0, opt(';'), space0, opt(("--", rest)), eof)
        .void()
        .parse_next(input)
}

fn comment<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded((space0, "--"), rest)
        .map(str::trim)
        .parse_next(input)
}

/// `local Name =`, returning `Name`.
fn local_binding<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded(("local", space1), terminated(identifier, assignment)).parse_next(input)
}

fn base_class<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(local_binding, ('{', space0, '}', line_end)).parse_next(input)
}

/// Start of a call's arguments: a parenthesised list, or a single string or
/// table argument written without parentheses.
fn call_arguments(input: &mut &str) -> ModalResult<()> {
    alt(("(", "\"", "'", "[[", "{")).void().parse_next(input)
}

fn subclass<'s>(input: &mut &'s str, method: &str) -> ModalResult<(&'s str, &'s str)> {
    let name = local_binding(input)?;
    let super_name = identifier(input)?;
    (space0, accessor, space0).parse_next(input)?;
    (identifier.verify(|op: &str| op == method), space0, call_arguments).parse_next(input)?;
    Ok((name, super_name))
}

fn static_field<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    (
        identifier.verify(|name: &str| name != "self"),
        '.',
        identifier,
        assignment,
    )
        .map(|(class, _, field, _)| (class, field))
        .parse_next(input)
}

fn self_field<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded((space0, "self", '.'), terminated(identifier, assignment)).parse_next(input)
}

/// A parameter name or the vararg marker.
fn parameter<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    alt(("...", identifier)).parse_next(input)
}

fn parameters<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    separated(0.., delimited(space0, parameter, space0), ',').parse_next(input)
}

fn method<'s>(input: &mut &'s str) -> ModalResult<MethodDecl<'s>> {
    let (_, _, class, accessor, name) =
        ("function", space1, identifier, accessor, identifier).parse_next(input)?;
    let params = delimited((space0, '('), parameters, (space0, ')')).parse_next(input)?;

    Ok(MethodDecl {
        class,
        accessor,
        name,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(source: &str) -> Line<'_> {
        classify(source, "subclass")
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(line("-- Base animal."), Line::Comment("Base animal."));
        assert_eq!(line("--"), Line::Comment(""));
        assert_eq!(line("    --   indented  "), Line::Comment("indented"));
    }

    #[test]
    fn test_base_class() {
        assert_eq!(line("local Animal = {}"), Line::BaseClass { name: "Animal" });
        assert_eq!(line("local Animal={ }"), Line::BaseClass { name: "Animal" });
        assert_eq!(
            line("local Animal = {} -- the root"),
            Line::BaseClass { name: "Animal" }
        );
    }

    #[test]
    fn test_non_empty_table_is_not_a_class() {
        assert_eq!(line("local Animal = { legs = 4 }"), Line::Other);
        assert_eq!(line("local Animal = {"), Line::Other);
    }

    #[test]
    fn test_indented_class_is_ignored() {
        assert_eq!(line("  local Animal = {}"), Line::Other);
    }

    #[test]
    fn test_subclass() {
        assert_eq!(
            line("local Dog = Animal:subclass()"),
            Line::Subclass {
                name: "Dog",
                super_name: "Animal"
            }
        );
        assert_eq!(
            line("local Dog = Animal:subclass(\"Dog\")"),
            Line::Subclass {
                name: "Dog",
                super_name: "Animal"
            }
        );
    }

    #[test]
    fn test_subclass_without_parentheses() {
        let expected = Line::Subclass {
            name: "Dog",
            super_name: "Animal",
        };
        assert_eq!(line("local Dog = Animal:subclass \"Dog\""), expected);
        assert_eq!(line("local Dog = Animal:subclass 'Dog'"), expected);
        assert_eq!(line("local Dog = Animal:subclass [[Dog]]"), expected);
        assert_eq!(line("local Dog = Animal:subclass{}"), expected);
        assert_eq!(line("local Dog = Animal:subclass { name = \"Dog\" }"), expected);
    }

    #[test]
    fn test_subclass_needs_call_arguments() {
        assert_eq!(line("local Dog = Animal:subclass"), Line::Other);
        assert_eq!(line("local Dog = Animal:subclass + 1"), Line::Other);
    }

    #[test]
    fn test_subclass_with_other_method_name() {
        assert_eq!(line("local Dog = Animal:extend()"), Line::Other);
        assert_eq!(
            classify("local Dog = Animal:extend()", "extend"),
            Line::Subclass {
                name: "Dog",
                super_name: "Animal"
            }
        );
    }

    #[test]
    fn test_static_field() {
        assert_eq!(
            line("Widget.count = 0"),
            Line::StaticField {
                class: "Widget",
                field: "count"
            }
        );
    }

    #[test]
    fn test_comparison_is_not_assignment() {
        assert_eq!(line("Widget.count == 0"), Line::Other);
        assert_eq!(line("    self.count == 0"), Line::Other);
    }

    #[test]
    fn test_self_field() {
        assert_eq!(line("    self.width = w"), Line::SelfField { field: "width" });
        assert_eq!(line("self.width = w"), Line::SelfField { field: "width" });
        assert_eq!(line("    selfish.width = w"), Line::Other);
    }

    #[test]
    fn test_method_declarations() {
        assert_eq!(
            line("function Widget:setSize(w, h)"),
            Line::Method(MethodDecl {
                class: "Widget",
                accessor: Accessor::Instance,
                name: "setSize",
                params: vec!["w", "h"],
            })
        );
        assert_eq!(
            line("function Widget.create()"),
            Line::Method(MethodDecl {
                class: "Widget",
                accessor: Accessor::Table,
                name: "create",
                params: vec![],
            })
        );
    }

    #[test]
    fn test_method_params_with_varargs_and_spacing() {
        assert_eq!(
            line("function Log:write( level ,fmt, ... ) print(fmt) end"),
            Line::Method(MethodDecl {
                class: "Log",
                accessor: Accessor::Instance,
                name: "write",
                params: vec!["level", "fmt", "..."],
            })
        );
    }

    #[test]
    fn test_unsupported_function_forms() {
        assert_eq!(line("function helper(x)"), Line::Other);
        assert_eq!(line("local function helper(x)"), Line::Other);
        assert_eq!(line("function A.b.c()"), Line::Other);
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(line(""), Line::Other);
        assert_eq!(line("   "), Line::Other);
        assert_eq!(line("return Widget"), Line::Other);
        assert_eq!(line("end"), Line::Other);
    }
}
