use crate::decl::Declaration;
use crate::document::Document;
use crate::stmt::Statement;
use crate::types::Type;

#[test]
fn document_starts_empty() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

#[test]
fn declarations_keep_append_order() {
    let mut doc = Document::new();
    doc.push(Declaration::Include("stdio.h".to_string()));
    doc.push(Declaration::function(
        "first",
        Type::int(),
        vec![],
        Statement::block(vec![]),
    ));
    doc.push(Declaration::function(
        "second",
        Type::Void,
        vec![],
        Statement::block(vec![]),
    ));

    let names: Vec<Option<&str>> = doc.declarations().iter().map(|d| d.name()).collect();
    assert_eq!(names, [None, Some("first"), Some("second")]);
}
