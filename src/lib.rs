use std::io::Write;

use anyhow::Context;
use log::info;

use brass::BrassInstrument;
use libcatalog::prelude::catalog::Catalog;
use strings::StringInstrument;

pub mod inspect;
pub mod render;

use render::{render_catalog, render_inspection};

pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.append(StringInstrument::new("Guitar", "Wood", 6));
    catalog.append(StringInstrument::new("Violin", "Wood", 4));
    catalog.append(BrassInstrument::new("Trumpet", "Brass", "Yellow Brass"));
    catalog.append(BrassInstrument::new("Trombone", "Brass", "Red Brass"));
    catalog
}

/// Builds the demo catalog, writes every instrument's block to `out`, then inspects the first
/// entry.
pub fn run<W>(out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let catalog = demo_catalog();
    info!("built a catalog of {} instruments", catalog.len());

    render_catalog(out, &catalog).context("while displaying the catalog")?;

    let first = catalog
        .get(0)
        .context("while picking the instrument to inspect")?;
    render_inspection(out, Some(first)).context("while displaying the inspection")?;

    out.flush().context("while flushing output")
}

#[cfg(test)]
mod tests {
    use libcatalog::prelude::instrument::Instrument;

    use super::*;

    const EXPECTED: &str = "\
String Instrument: Guitar
Material: Wood
Number of strings: 6

String Instrument: Violin
Material: Wood
Number of strings: 4

Brass Instrument: Trumpet
Material: Brass
Brass type: Yellow Brass

Brass Instrument: Trombone
Material: Brass
Brass type: Red Brass

String Instrument: Guitar
Material: Wood
Number of strings: 6
";

    #[test]
    fn test_run() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn test_demo_catalog_order() {
        let names = demo_catalog()
            .iter()
            .map(|instrument| instrument.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Guitar", "Violin", "Trumpet", "Trombone"]);
    }

    #[test]
    fn test_inspection_matches_first_block() {
        let catalog = demo_catalog();
        let first = catalog.get(0).unwrap();
        assert_eq!(
            inspect::inspect_and_describe(Some(first)),
            first.describe()
        );
    }
}
