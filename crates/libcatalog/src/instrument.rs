use std::{
    any::Any,
    fmt::{self, Display},
};

use itertools::Itertools;

/// Gives a trait object access to the [`Any`] of its concrete type, so callers holding a
/// `&dyn Instrument` can ask which family it really belongs to.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An Instrument is anything with a name and a material that can describe itself
///
/// Implementors are expected to be immutable once built: the catalog only ever hands out shared
/// references to them.
pub trait Instrument: AsAny + fmt::Debug {
    fn name(&self) -> &str;
    fn material(&self) -> &str;

    /// Multi-line, human-readable summary of this instrument's fields. Families override this to
    /// add their own kind label and extra fields.
    fn describe(&self) -> String {
        Description::new("Instrument", self.name())
            .field("Material", self.material())
            .to_string()
    }
}

/// `<Label>: <value>` lines making up an instrument's description, headed by its kind and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(Vec<String>);

impl Description {
    pub fn new(kind: &str, name: &str) -> Self {
        Description(vec![format!("{kind}: {name}")])
    }

    pub fn field<V: Display>(mut self, label: &str, value: V) -> Self {
        self.0.push(format!("{label}: {value}"));
        self
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}
