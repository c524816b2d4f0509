//! Relationship shapes a capability registration can take.

use crate::error::InvalidKind;
use std::fmt;
use std::str::FromStr;

/// The relationship shapes the host registration layer supports.
///
/// These correspond to the four classic object-relation forms. The binder
/// never interprets the kind; it is threaded through to the host unchanged
/// so both variants of a toggled capability register under the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// One owning entity, many related entities.
    OneToMany,
    /// One owning entity, at most one related entity.
    OneToOne,
    /// The owning side of a relation: this entity holds the reference.
    ManyToOne,
    /// Many entities on both sides, joined externally.
    ManyToMany,
}

impl RelationKind {
    /// All supported shapes.
    pub const ALL: [RelationKind; 4] = [
        RelationKind::OneToMany,
        RelationKind::OneToOne,
        RelationKind::ManyToOne,
        RelationKind::ManyToMany,
    ];

    /// The canonical textual name of this shape.
    pub const fn as_str(self) -> &'static str {
        match self {
            RelationKind::OneToMany => "one_to_many",
            RelationKind::OneToOne => "one_to_one",
            RelationKind::ManyToOne => "many_to_one",
            RelationKind::ManyToMany => "many_to_many",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = InvalidKind;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "one_to_many" => Ok(RelationKind::OneToMany),
            "one_to_one" => Ok(RelationKind::OneToOne),
            "many_to_one" => Ok(RelationKind::ManyToOne),
            "many_to_many" => Ok(RelationKind::ManyToMany),
            other => Err(InvalidKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.as_str().parse::<RelationKind>(), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown_shapes() {
        let err = "one_to_few".parse::<RelationKind>().unwrap_err();
        assert_eq!(err, InvalidKind("one_to_few".to_string()));
    }
}
