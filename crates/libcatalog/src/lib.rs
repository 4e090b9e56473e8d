#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod instrument;

pub mod prelude {
    pub mod instrument {
        pub use crate::instrument::{AsAny, Description, Instrument};
    }

    pub mod catalog {
        pub use crate::catalog::{Catalog, CatalogError, Iter};
    }
}
