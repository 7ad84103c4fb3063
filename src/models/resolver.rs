use super::position::SectorCoordinate;

/// Maps a human-readable sector name to its grid cell.
///
/// Implementations own the name table; location construction only calls
/// through this trait. `None` means the name is unknown.
pub trait SectorNameResolver {
    fn resolve(&self, name: &str) -> Option<SectorCoordinate>;
}

impl<F> SectorNameResolver for F
where
    F: Fn(&str) -> Option<SectorCoordinate>,
{
    fn resolve(&self, name: &str) -> Option<SectorCoordinate> {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_resolve() {
        let resolver = |name: &str| (name == "Core").then_some(SectorCoordinate::ORIGIN);
        assert_eq!(resolver.resolve("Core"), Some(SectorCoordinate::ORIGIN));
        assert_eq!(resolver.resolve("Nowhere"), None);
    }
}
