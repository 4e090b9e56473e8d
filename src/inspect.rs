use brass::BrassInstrument;
use libcatalog::prelude::instrument::*;
use log::{debug, warn};
use strings::StringInstrument;

pub const UNKNOWN_INSTRUMENT: &str = "Unknown instrument type.";

/// Works out which known family `instrument` belongs to and describes it through that family's
/// own implementation. Families not listed here, and absent instruments, get
/// [`UNKNOWN_INSTRUMENT`]; neither is an error.
pub fn inspect_and_describe(instrument: Option<&dyn Instrument>) -> String {
    let Some(instrument) = instrument else {
        warn!("asked to inspect an absent instrument");
        return UNKNOWN_INSTRUMENT.to_string();
    };

    let any = instrument.as_any();
    if let Some(string_instrument) = any.downcast_ref::<StringInstrument>() {
        debug!(
            "`{}` is a string instrument with {} strings",
            string_instrument.name(),
            string_instrument.string_count()
        );
        string_instrument.describe()
    } else if let Some(brass_instrument) = any.downcast_ref::<BrassInstrument>() {
        debug!(
            "`{}` is a brass instrument made of `{}`",
            brass_instrument.name(),
            brass_instrument.brass_type()
        );
        brass_instrument.describe()
    } else {
        warn!("`{}` is of no known instrument family", instrument.name());
        UNKNOWN_INSTRUMENT.to_string()
    }
}
