// Read-only reference data: transport emission factors and capital-to-capital distances.

pub mod distances;
pub mod transport;

pub use distances::{CapitalDistanceTable, RouteEntry};
pub use transport::StaticTransportCatalog;
