//! Well-known banner file locations.

use crate::NormalizedPath;

/// The system banner files this tool manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerFile {
    /// Pre-login banner, shown by getty before authentication
    Issue,
    /// Post-login banner (message of the day)
    Motd,
}

impl BannerFile {
    /// Location relative to the filesystem root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::Issue => "etc/issue",
            Self::Motd => "etc/motd",
        }
    }

    /// Resolve this banner under `root` (normally `/`).
    pub fn from_root(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(self.relative_path())
    }
}

impl std::fmt::Display for BannerFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_root_resolves_to_etc() {
        let root = NormalizedPath::new("/");
        assert_eq!(BannerFile::Issue.from_root(&root).as_str(), "/etc/issue");
        assert_eq!(BannerFile::Motd.from_root(&root).as_str(), "/etc/motd");
    }

    #[test]
    fn banner_files_never_collide() {
        let root = NormalizedPath::new("/srv/chroot");
        assert_ne!(
            BannerFile::Issue.from_root(&root),
            BannerFile::Motd.from_root(&root)
        );
    }

    #[test]
    fn display_is_absolute() {
        assert_eq!(BannerFile::Motd.to_string(), "/etc/motd");
    }
}
