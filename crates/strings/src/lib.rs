use libcatalog::prelude::instrument::*;
use log::trace;

/// An instrument sounded through vibrating strings, like a guitar or a violin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringInstrument {
    name: String,
    material: String,
    string_count: u32,
}

impl StringInstrument {
    pub fn new<N, M>(name: N, material: M, string_count: u32) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        StringInstrument {
            name: name.into(),
            material: material.into(),
            string_count,
        }
    }

    pub fn string_count(&self) -> u32 {
        self.string_count
    }
}

impl Instrument for StringInstrument {
    fn name(&self) -> &str {
        &self.name
    }

    fn material(&self) -> &str {
        &self.material
    }

    fn describe(&self) -> String {
        trace!("describing string instrument `{}`", self.name);
        Description::new("String Instrument", &self.name)
            .field("Material", &self.material)
            .field("Number of strings", self.string_count)
            .to_string()
    }
}
