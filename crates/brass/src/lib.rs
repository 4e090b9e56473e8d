use libcatalog::prelude::instrument::*;
use log::trace;

/// A brass-family wind instrument. `brass_type` is a free-form label, usually the alloy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrassInstrument {
    name: String,
    material: String,
    brass_type: String,
}

impl BrassInstrument {
    pub fn new<N, M, B>(name: N, material: M, brass_type: B) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        B: Into<String>,
    {
        BrassInstrument {
            name: name.into(),
            material: material.into(),
            brass_type: brass_type.into(),
        }
    }

    pub fn brass_type(&self) -> &str {
        &self.brass_type
    }
}

impl Instrument for BrassInstrument {
    fn name(&self) -> &str {
        &self.name
    }

    fn material(&self) -> &str {
        &self.material
    }

    fn describe(&self) -> String {
        trace!("describing brass instrument `{}`", self.name);
        Description::new("Brass Instrument", &self.name)
            .field("Material", &self.material)
            .field("Brass type", &self.brass_type)
            .to_string()
    }
}
