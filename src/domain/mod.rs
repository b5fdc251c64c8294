// Domain layer: package and category types. No dependencies beyond std/serde.

pub mod model;
