// Unit Use Case

use crate::domain::Unit;
use crate::error::Result;

/// Resolve the unit to display; `None` gives the default unit
pub fn resolve(name: Option<&str>) -> Result<Unit> {
    match name {
        Some(name) => Ok(Unit::new(name)?),
        None => Ok(Unit::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve(None).unwrap().to_string(), "Mile");
    }

    #[test]
    fn test_resolve_named() {
        assert_eq!(resolve(Some("Furlong")).unwrap().name(), "Furlong");
    }

    #[test]
    fn test_resolve_blank_is_domain_error() {
        assert!(matches!(resolve(Some("")), Err(AppError::Domain(_))));
    }
}
