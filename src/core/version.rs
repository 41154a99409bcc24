//! Dot-separated version strings ("1.2.3") and their ordering.

use thiserror::Error;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid segment {segment:?} in version {version:?}")]
    InvalidSegment { version: String, segment: String },
}

/// A parsed version, one unsigned integer per dot-separated segment.
///
/// Ordering compares segment by segment; when one version is a prefix of the
/// other the longer one is greater, so "1.2.0" > "1.2".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    #[inline]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

fn parse_segment(segment: &str) -> Option<u64> {
    let trimmed = segment.trim();
    // "1..2" reads as "1.0.2"
    if trimmed.is_empty() {
        return Some(0);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split('.')
            .map(|segment| {
                parse_segment(segment).ok_or_else(|| VersionError::InvalidSegment {
                    version: s.to_string(),
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Version { segments })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Compares two version strings.
///
/// Segments containing anything but digits (after trimming whitespace) are rejected.
/// `Ordering as i8` gives the -1 / 0 / 1 form.
pub fn compare_version(v1: &str, v2: &str) -> Result<Ordering, VersionError> {
    let v1: Version = v1.parse()?;
    let v2: Version = v2.parse()?;
    Ok(v1.cmp(&v2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_versions() -> Result<(), VersionError> {
        assert_eq!(compare_version("1.2.0", "1.2")?, Ordering::Greater);
        assert_eq!(compare_version("1.2", "1.2.0")?, Ordering::Less);
        assert_eq!(compare_version("2.0.0", "1.9.9")?, Ordering::Greater);
        assert_eq!(compare_version("1.0", "1.0")?, Ordering::Equal);
        assert_eq!(compare_version("1.10", "1.9")?, Ordering::Greater);
        assert_eq!(compare_version("1.2.3", "1.3")? as i8, -1);
        Ok(())
    }

    #[test]
    fn lenient_segments() -> Result<(), VersionError> {
        assert_eq!(compare_version("1..2", "1.0.2")?, Ordering::Equal);
        assert_eq!(compare_version(" 1 . 2", "1.2")?, Ordering::Equal);
        assert_eq!("007.1".parse::<Version>()?.segments(), &[7, 1]);
        Ok(())
    }

    #[test]
    fn rejects_non_numeric_segments() {
        let err = compare_version("1.a.2", "1.0").unwrap_err();
        assert_eq!(
            err,
            VersionError::InvalidSegment {
                version: "1.a.2".into(),
                segment: "a".into(),
            }
        );
        assert!(compare_version("1.0", "1.-1").is_err());
        assert!(compare_version("1.0", "99999999999999999999999").is_err());
        assert_eq!(
            err.to_string(),
            r#"invalid segment "a" in version "1.a.2""#
        );
    }

    #[test]
    fn display_round_trip() -> Result<(), VersionError> {
        let version: Version = "3.02.1".parse()?;
        assert_eq!(version.to_string(), "3.2.1");
        Ok(())
    }
}
