//! Harness runtime configuration.
//!
//! The domain policy to verify under is taken from `--mode`, then from the
//! `FREEMATH_MODE` environment variable. With neither set, runs cover both
//! policies.

use freemath_core::DomainPolicy;

use crate::error::HarnessError;

/// Environment variable naming the domain policy to verify under.
pub const MODE_ENV_VAR: &str = "FREEMATH_MODE";

/// Parser for `--mode` and `FREEMATH_MODE` values: `strict` or `hardened`.
pub fn parse_mode(raw: &str) -> Result<DomainPolicy, HarnessError> {
    DomainPolicy::from_name(raw).ok_or_else(|| HarnessError::UnknownMode(raw.to_string()))
}

/// Policy named by `FREEMATH_MODE`, or `None` when unset.
pub fn policy_from_env() -> Result<Option<DomainPolicy>, HarnessError> {
    policy_from_var(std::env::var(MODE_ENV_VAR).ok().as_deref())
}

fn policy_from_var(raw: Option<&str>) -> Result<Option<DomainPolicy>, HarnessError> {
    raw.map(parse_mode).transpose()
}

/// Policies a run covers: the `--mode` flag wins over the environment, and
/// with neither both policies are run.
pub fn select_modes(
    flag: Option<&str>,
    env: Option<DomainPolicy>,
) -> Result<Vec<DomainPolicy>, HarnessError> {
    if let Some(raw) = flag {
        return Ok(vec![parse_mode(raw)?]);
    }
    Ok(match env {
        Some(policy) => vec![policy],
        None => vec![DomainPolicy::Strict, DomainPolicy::Hardened],
    })
}

/// Whether a fixture case tagged `case_mode` runs under `active`.
#[must_use]
pub fn mode_matches(active: DomainPolicy, case_mode: &str) -> bool {
    case_mode.eq_ignore_ascii_case("both") || case_mode.eq_ignore_ascii_case(active.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parser_is_strict_or_hardened_only() {
        assert_eq!(parse_mode("strict").unwrap(), DomainPolicy::Strict);
        assert_eq!(parse_mode("Hardened").unwrap(), DomainPolicy::Hardened);
        assert!(matches!(
            parse_mode("saturate"),
            Err(HarnessError::UnknownMode(m)) if m == "saturate"
        ));
    }

    #[test]
    fn env_value_is_parsed_strictly() {
        assert_eq!(policy_from_var(None).unwrap(), None);
        assert_eq!(
            policy_from_var(Some("hardened")).unwrap(),
            Some(DomainPolicy::Hardened)
        );
        assert!(matches!(
            policy_from_var(Some("repair")),
            Err(HarnessError::UnknownMode(m)) if m == "repair"
        ));
    }

    #[test]
    fn flag_overrides_env_and_default_covers_both() {
        assert_eq!(
            select_modes(Some("strict"), Some(DomainPolicy::Hardened)).unwrap(),
            vec![DomainPolicy::Strict]
        );
        assert_eq!(
            select_modes(None, Some(DomainPolicy::Hardened)).unwrap(),
            vec![DomainPolicy::Hardened]
        );
        assert_eq!(
            select_modes(None, None).unwrap(),
            vec![DomainPolicy::Strict, DomainPolicy::Hardened]
        );
        assert!(select_modes(Some("lenient"), None).is_err());
    }

    #[test]
    fn both_matches_every_mode() {
        assert!(mode_matches(DomainPolicy::Strict, "both"));
        assert!(mode_matches(DomainPolicy::Hardened, "BOTH"));
        assert!(mode_matches(DomainPolicy::Strict, "strict"));
        assert!(!mode_matches(DomainPolicy::Strict, "hardened"));
        assert!(!mode_matches(DomainPolicy::Hardened, "strict"));
    }
}
