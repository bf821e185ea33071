use about::BuildInfo;
use const_format::formatcp;

pub const ARTIFACT_ID: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COMMIT: &str = env!("VERGEN_GIT_SHA");
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// clap の `--version` 用のバージョン文字列を返す。
pub fn short_version() -> &'static str {
    formatcp!("{VERSION} ({COMMIT} {BUILD_TIMESTAMP})")
}

/// このバイナリに埋め込まれたビルドメタデータを返す。
pub const fn current() -> BuildInfo {
    BuildInfo::new(ARTIFACT_ID, BUILD_TIMESTAMP, COMMIT, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_carries_package_metadata() {
        let info = current();
        assert_eq!(info.artifact_id(), "zest");
        assert!(!info.version().is_empty());
        assert_eq!(info.version(), VERSION);
        assert_eq!(info.commit(), COMMIT);
        assert_eq!(info.build_timestamp(), BUILD_TIMESTAMP);
        assert_eq!(info.is_snapshot(), VERSION.contains("SNAPSHOT"));
    }

    #[test]
    fn short_version_contains_commit_and_timestamp() {
        let version = short_version();
        assert!(version.contains(VERSION));
        assert!(version.contains(COMMIT));
        assert!(version.contains(BUILD_TIMESTAMP));
    }
}
