mod lookup;

pub use lookup::IpLookupResult;
