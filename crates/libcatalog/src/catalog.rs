use std::{fmt, slice};

use log::trace;

use crate::instrument::Instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::IndexOutOfRange { index, len } => {
                write!(f, "index `{index}` is out of range for a catalog of {len}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, owning collection of instruments of any family
///
/// Display order is insertion order. Every instrument lives exactly as long as the catalog
/// holding it.
#[derive(Debug, Default)]
pub struct Catalog {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn append<I>(&mut self, instrument: I)
    where
        I: Instrument,
    {
        self.append_boxed(Box::new(instrument))
    }

    pub fn append_boxed(&mut self, instrument: Box<dyn Instrument>) {
        trace!(
            "appending `{}` at {}",
            instrument.name(),
            self.instruments.len()
        );
        self.instruments.push(instrument);
    }

    pub fn get(&self, index: usize) -> Result<&dyn Instrument, CatalogError> {
        self.instruments
            .get(index)
            .map(|instrument| instrument.as_ref())
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.instruments.len(),
            })
    }

    pub fn first(&self) -> Option<&dyn Instrument> {
        self.get(0).ok()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.instruments.iter())
    }

    /// Describes every instrument in insertion order without consuming the catalog; call again to
    /// start over.
    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().enumerate().map(|(i, instrument)| {
            trace!("describing `{}` at {i}", instrument.name());
            instrument.describe()
        })
    }
}

#[derive(Debug)]
pub struct Iter<'a>(slice::Iter<'a, Box<dyn Instrument>>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a dyn Instrument;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|instrument| instrument.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a dyn Instrument;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Box<dyn Instrument>> for Catalog {
    fn from_iter<T: IntoIterator<Item = Box<dyn Instrument>>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Box<dyn Instrument>> for Catalog {
    fn extend<T: IntoIterator<Item = Box<dyn Instrument>>>(&mut self, iter: T) {
        for instrument in iter {
            self.append_boxed(instrument);
        }
    }
}
