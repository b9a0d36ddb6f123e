use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Source-level modifier of a type or method, as written in hierarchy documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Bridge,
    Synthetic,
}

impl Modifier {
    pub const ALL: [Modifier; 8] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Static,
        Modifier::Final,
        Modifier::Abstract,
        Modifier::Bridge,
        Modifier::Synthetic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
            Modifier::Bridge => "bridge",
            Modifier::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JVM access flags (JVMS 4.6). Only the bits the classifier consults are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessFlags(u16);

impl AccessFlags {
    pub const PUBLIC: AccessFlags = AccessFlags(0x0001);
    pub const PRIVATE: AccessFlags = AccessFlags(0x0002);
    pub const PROTECTED: AccessFlags = AccessFlags(0x0004);
    pub const STATIC: AccessFlags = AccessFlags(0x0008);
    pub const FINAL: AccessFlags = AccessFlags(0x0010);
    pub const BRIDGE: AccessFlags = AccessFlags(0x0040);
    pub const ABSTRACT: AccessFlags = AccessFlags(0x0400);
    pub const SYNTHETIC: AccessFlags = AccessFlags(0x1000);

    pub const fn empty() -> Self {
        AccessFlags(0)
    }

    pub const fn from_bits(bits: u16) -> Self {
        AccessFlags(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: AccessFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        modifiers
            .into_iter()
            .fold(AccessFlags::empty(), |flags, modifier| flags | modifier.into())
    }

    /// Modifiers whose bits are set, in declaration order.
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |&modifier| self.contains(modifier.into()))
    }
}

impl From<Modifier> for AccessFlags {
    fn from(modifier: Modifier) -> Self {
        match modifier {
            Modifier::Public => AccessFlags::PUBLIC,
            Modifier::Protected => AccessFlags::PROTECTED,
            Modifier::Private => AccessFlags::PRIVATE,
            Modifier::Static => AccessFlags::STATIC,
            Modifier::Final => AccessFlags::FINAL,
            Modifier::Abstract => AccessFlags::ABSTRACT,
            Modifier::Bridge => AccessFlags::BRIDGE,
            Modifier::Synthetic => AccessFlags::SYNTHETIC,
        }
    }
}

impl BitOr for AccessFlags {
    type Output = AccessFlags;

    fn bitor(self, rhs: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_modifiers_sets_jvm_bits() {
        let flags =
            AccessFlags::from_modifiers([Modifier::Public, Modifier::Bridge, Modifier::Synthetic]);
        assert_eq!(flags.bits(), 0x1041);
        assert!(flags.contains(AccessFlags::BRIDGE));
        assert!(!flags.contains(AccessFlags::STATIC));
    }

    #[test]
    fn test_modifiers_round_trip_in_order() {
        let flags =
            AccessFlags::from_modifiers([Modifier::Synthetic, Modifier::Final, Modifier::Public]);
        let modifiers: Vec<Modifier> = flags.modifiers().collect();
        assert_eq!(
            modifiers,
            vec![Modifier::Public, Modifier::Final, Modifier::Synthetic]
        );
    }
}
