use std::io::{self, Write};

use libcatalog::prelude::{catalog::Catalog, instrument::Instrument};
use log::trace;

use crate::inspect::inspect_and_describe;

/// Writes one block per instrument, in catalog order, each followed by a blank line
pub fn render_catalog<W>(out: &mut W, catalog: &Catalog) -> io::Result<()>
where
    W: Write,
{
    for description in catalog.descriptions() {
        writeln!(out, "{description}")?;
        writeln!(out)?;
    }
    trace!("rendered {} instruments", catalog.len());
    Ok(())
}

pub fn render_inspection<W>(out: &mut W, instrument: Option<&dyn Instrument>) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{}", inspect_and_describe(instrument))
}

#[cfg(test)]
mod tests {
    use brass::BrassInstrument;
    use strings::StringInstrument;

    use super::*;

    #[test]
    fn test_render_catalog() {
        let mut catalog = Catalog::new();
        catalog.append(BrassInstrument::new("Horn", "Brass", "Gold Brass"));
        catalog.append(StringInstrument::new("Banjo", "Wood", 5));

        let mut out = Vec::new();
        render_catalog(&mut out, &catalog).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Brass Instrument: Horn\nMaterial: Brass\nBrass type: Gold Brass\n\n\
             String Instrument: Banjo\nMaterial: Wood\nNumber of strings: 5\n\n"
        );
    }

    #[test]
    fn test_render_empty_catalog() {
        let mut out = Vec::new();
        render_catalog(&mut out, &Catalog::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_inspection() {
        let mut out = Vec::new();
        render_inspection(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Unknown instrument type.\n");
    }
}
