use std::collections::HashSet;

const BUILTIN: &[&str] = &[
    "String",
    "System",
    "Double",
    "Float",
    "Integer",
    "Boolean",
    "Exception",
    "Math",
];

/// Identifiers that are copied as written instead of being transliterated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExemptIdentifiers {
    names: HashSet<String>,
}

impl ExemptIdentifiers {
    pub fn new() -> Self {
        ExemptIdentifiers {
            names: HashSet::new(),
        }
    }

    /// Library types that break the program if renamed.
    pub fn builtin() -> Self {
        let mut exempt = ExemptIdentifiers::new();
        for name in BUILTIN {
            exempt.insert(name);
        }
        exempt
    }

    pub fn with_additions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.insert(name.as_ref());
        }
        self
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(String::from(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
