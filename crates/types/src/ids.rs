//! Stable positional identity for rendered artifacts.
//!
//! An artifact is addressed by where its section sits in the document, not by
//! its content, so selection flags survive re-renders of the same document.

use std::fmt;
use std::str::FromStr;

/// The positional identity of one rendered artifact:
/// `(sheet index, section index, subgroup index)`, all zero-based.
///
/// Sections that produce a single artifact use subgroup `0`. Table sections
/// produce one artifact per row-group, numbered in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId {
    pub sheet: usize,
    pub section: usize,
    pub subgroup: usize,
}

impl ArtifactId {
    pub fn new(sheet: usize, section: usize, subgroup: usize) -> Self {
        Self { sheet, section, subgroup }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.sheet, self.section, self.subgroup)
    }
}

/// Parses `"sheet:section"` or `"sheet:section:subgroup"`; the subgroup
/// defaults to 0. This is the form the CLI accepts.
impl FromStr for ArtifactId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let mut next_index = |name: &str| -> Result<Option<usize>, String> {
            match parts.next() {
                None => Ok(None),
                Some(p) => p
                    .trim()
                    .parse::<usize>()
                    .map(Some)
                    .map_err(|_| format!("invalid {} index in '{}'", name, s)),
            }
        };

        let sheet = next_index("sheet")?.ok_or_else(|| format!("empty artifact id '{}'", s))?;
        let section =
            next_index("section")?.ok_or_else(|| format!("missing section index in '{}'", s))?;
        let subgroup = next_index("subgroup")?.unwrap_or(0);
        if parts.next().is_some() {
            return Err(format!("too many components in artifact id '{}'", s));
        }
        Ok(Self { sheet, section, subgroup })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        let id = ArtifactId::new(1, 4, 2);
        assert_eq!(id.to_string().parse::<ArtifactId>().unwrap(), id);
    }

    #[test]
    fn subgroup_defaults_to_zero() {
        assert_eq!("0:3".parse::<ArtifactId>().unwrap(), ArtifactId::new(0, 3, 0));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!("".parse::<ArtifactId>().is_err());
        assert!("1".parse::<ArtifactId>().is_err());
        assert!("a:b".parse::<ArtifactId>().is_err());
        assert!("1:2:3:4".parse::<ArtifactId>().is_err());
    }

    #[test]
    fn orders_by_document_position() {
        let mut ids = vec![
            ArtifactId::new(1, 0, 0),
            ArtifactId::new(0, 2, 1),
            ArtifactId::new(0, 2, 0),
            ArtifactId::new(0, 0, 0),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                ArtifactId::new(0, 0, 0),
                ArtifactId::new(0, 2, 0),
                ArtifactId::new(0, 2, 1),
                ArtifactId::new(1, 0, 0),
            ]
        );
    }
}
