//! Integration tests for the DocBuilder API

use std::fs;

use classdoc::{
    ClassdocError, DocBuilder,
    config::{AppConfig, ClassOrder, ParserConfig, RenderConfig},
    document::Document,
};

fn render(sources: &[&str]) -> String {
    let builder = DocBuilder::default();
    let mut document = Document::new();
    for source in sources {
        builder
            .parse(&mut document, source)
            .expect("Failed to parse source");
    }
    builder
        .render_markdown(&document, "Docs")
        .expect("Failed to render")
}

#[test]
fn test_end_to_end_inheritance_and_undocumented_method() {
    let markdown = render(&[
        "local Dog = Animal:subclass()\n\nfunction Dog:bark()\nend\n",
        "-- Base animal.\nlocal Animal = {}\n",
    ]);

    let dog = &markdown[markdown.find("## Dog").expect("Dog section")..];
    assert!(dog.contains("Inheritance: [Dog](#dog) > [Animal](#animal)\n"));
    assert!(dog.contains("### Methods\n\n#### Dog:bark()\n"));
    assert!(markdown.contains("## Animal\n\nBase animal.\n"));
}

#[test]
fn test_hierarchy_independent_of_file_order() {
    let animal = "local Animal = {}\n";
    let dog = "local Dog = Animal:subclass()\n";

    for sources in [[animal, dog], [dog, animal]] {
        let markdown = render(&sources);
        assert!(markdown.contains("Inheritance: [Dog](#dog) > [Animal](#animal)"));
    }
}

#[test]
fn test_documenting_an_override_makes_it_visible() {
    let base = "local Animal = {}\n\nfunction Animal:speak()\nend\n";

    let hidden = render(&[base, "local Dog = Animal:subclass()\nfunction Dog:speak()\nend\n"]);
    assert!(!hidden.contains("Dog:speak"));

    let shown = render(&[
        base,
        "local Dog = Animal:subclass()\n-- Woof.\nfunction Dog:speak()\nend\n",
    ]);
    assert!(shown.contains("#### Dog:speak()\n\nWoof.\n"));
}

#[test]
fn test_constructor_is_always_rendered() {
    let markdown = render(&[
        "local Animal = {}\n-- Create.\nfunction Animal:init(name)\nend\n",
        "local Dog = Animal:subclass()\nfunction Dog:init(name, breed)\nend\n",
    ]);

    assert!(markdown.contains("#### Dog(name, breed)\n\nCreate.\n"));
}

#[test]
fn test_contents_are_alphabetical() {
    let markdown = render(&["local zeta = {}\nlocal Beta = {}\nlocal Alpha = {}\n"]);

    assert!(markdown.contains(
        "## Contents\n\n- [Alpha](#alpha)\n- [Beta](#beta)\n- [zeta](#zeta)\n\n"
    ));
    let alpha = markdown.find("## Alpha").unwrap();
    let zeta = markdown.find("## zeta").unwrap();
    assert!(alpha < zeta);
}

#[test]
fn test_undefined_class_aborts() {
    let builder = DocBuilder::default();
    let mut document = Document::new();

    let result = builder.parse(&mut document, "function Ghost:haunt()\nend\n");

    assert!(matches!(result, Err(ClassdocError::Parse { .. })));
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        RenderConfig::default()
            .with_constructor("new")
            .with_class_order(ClassOrder::Declaration),
        ParserConfig::new("extend", vec!["lua".to_string()]),
    );
    let builder = DocBuilder::new(config);
    let mut document = Document::new();

    builder
        .parse(
            &mut document,
            "local Shape = {}\nlocal Circle = Shape:extend()\nfunction Circle:new(r)\nend\n",
        )
        .expect("Failed to parse");
    let markdown = builder.render_markdown(&document, "Shapes").expect("render");

    assert!(markdown.contains("- [Shape](#shape)\n- [Circle](#circle)\n"));
    assert!(markdown.contains("Inheritance: [Circle](#circle) > [Shape](#shape)"));
    assert!(markdown.contains("#### Circle(r)"));
}

#[test]
fn test_parse_files_reads_in_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let first = dir.path().join("a.lua");
    let second = dir.path().join("b.lua");
    fs::write(&first, "local Widget = {}\n").expect("write first");
    fs::write(&second, "-- Draw.\nfunction Widget:draw()\nend\n").expect("write second");

    let builder = DocBuilder::default();
    let document = builder.parse_files([&first, &second]).expect("parse files");
    let reversed = builder.parse_files([&second, &first]);

    assert!(document.class("Widget").unwrap().member("draw").is_some());
    match reversed {
        Err(ClassdocError::Parse { path, .. }) => {
            assert_eq!(path.as_deref(), Some(second.as_path()));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_error_names_the_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let present = dir.path().join("animal.lua");
    fs::write(&present, "local Animal = {}\n").expect("write source");
    let missing = dir.path().join("missing.lua");
    let builder = DocBuilder::default();

    let result = builder.parse_files([&present, &missing]);

    let err = result.expect_err("missing input should fail");
    assert!(err.to_string().contains("missing.lua"));
    match err {
        ClassdocError::Read { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected read error, got {other:?}"),
    }
}
