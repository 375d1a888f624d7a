//! Dependency Inversion: research code depends on a browsing trait, not on
//! how relationships are stored.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The abstraction high-level code is written against.
pub trait RelationshipBrowser {
    /// Lazily yield the names of every child of `name`.
    fn find_all_children_of<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Low-level storage: a flat list of `(from, relationship, to)` triples.
#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the link in both directions.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn relations(&self) -> &[(Person, Relationship, Person)] {
        &self.relations
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.relations
                .iter()
                .filter(move |(from, rel, _)| from.name == name && *rel == Relationship::Parent)
                .map(|(_, _, to)| to.name.as_str()),
        )
    }
}

/// High-level module. Sees only a `RelationshipBrowser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Research {
    findings: Vec<String>,
}

impl Research {
    pub fn new(browser: &dyn RelationshipBrowser, person: &Person) -> Self {
        let findings: Vec<String> = browser
            .find_all_children_of(&person.name)
            .map(|child| format!("{} has a child called {}", person.name, child))
            .collect();
        for finding in &findings {
            tracing::info!("{}", finding);
        }
        Self { findings }
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }
}
