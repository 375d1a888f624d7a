//! Integration tests for the principle demos.
//!
//! Each test drives a demo through the public API the way the binary does.

use principles::*;

#[test]
fn test_journal_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.txt");

    let mut journal = Journal::new();
    journal.add_entry("I coded one program");
    journal.add_entry("I ate icecream");
    PersistenceManager::save_to_file(&journal, &path).unwrap();

    let saved = PersistenceManager::load_from_file(&path).unwrap();
    assert_eq!(saved, journal.to_string());
    assert_eq!(saved.lines().count(), 2);
}

#[test]
fn test_shapes_through_trait_objects() {
    let mut shapes: Vec<Box<dyn Shape>> = vec![Box::new(Rectangle::new(2, 3)), Box::new(Square::new(5))];

    let checks: Vec<bool> = shapes.iter_mut().map(|s| use_it(s.as_mut()).holds()).collect();
    assert_eq!(checks, vec![true, false]);
}

#[test]
fn test_research_depends_only_on_browser() {
    let parent = Person::new("John");
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &Person::new("Chris"));
    relationships.add_parent_and_child(&Person::new("Chris"), &Person::new("Matt"));

    let browser: &dyn RelationshipBrowser = &relationships;
    let research = Research::new(browser, &parent);
    assert_eq!(research.findings(), &["John has a child called Chris".to_string()]);
}

#[test]
fn test_fat_interface_fails_at_runtime() {
    let mut old = OldFashionPrinter::default();
    let err = Machine::scan(&mut old, "page").unwrap_err();
    assert_eq!(err.to_string(), "OldFashionPrinter cannot scan");
}
